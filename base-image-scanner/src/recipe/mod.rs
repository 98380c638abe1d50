//! Line-oriented Dockerfile statement parsing.
//!
//! Each physical line is parsed on its own: quoted strings are not
//! tokenized and a trailing `\` does not join the next line.

mod statements;

pub use statements::{Arguments, RecipeStatements};

/// Dockerfile instruction keywords recognized by [`parse_recipe`].
pub const INSTRUCTIONS: &[&str] = &[
    "ADD",
    "ARG",
    "CMD",
    "COPY",
    "ENTRYPOINT",
    "ENV",
    "EXPOSE",
    "FROM",
    "HEALTHCHECK",
    "LABEL",
    "MAINTAINER",
    "ONBUILD",
    "RUN",
    "SHELL",
    "STOPSIGNAL",
    "USER",
    "VOLUME",
    "WORKDIR",
];

/// Instruction keyword naming a base image.
pub const FROM: &str = "FROM";

/// Parses Dockerfile text into statements grouped by instruction.
///
/// A line is kept when its first whitespace-delimited token, uppercased, is
/// one of [`INSTRUCTIONS`]. The remaining tokens become the statement's
/// arguments. Blank lines, comments and continuation lines are skipped.
///
/// # Examples
///
/// ```
/// use base_image_scanner::recipe::parse_recipe;
///
/// let statements = parse_recipe("FROM rust:1.80 as build\nRUN cargo build\nfrom debian");
/// assert_eq!(statements.get("FROM").len(), 2);
/// assert_eq!(statements.get("FROM")[0], ["rust:1.80", "as", "build"]);
/// ```
#[must_use]
pub fn parse_recipe(content: &str) -> RecipeStatements {
    let mut statements = RecipeStatements::new();

    for line in content.lines() {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        let keyword = keyword.to_ascii_uppercase();
        if !INSTRUCTIONS.contains(&keyword.as_str()) {
            continue;
        }

        statements.push(&keyword, tokens.map(str::to_string).collect());
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCKERFILE: &str = "\
FROM docker/image:latest as base
COPY dependencies.yml .
RUN package update && \\
    package install


from base
Copy src .
RUN runtime build
ENTRYPOINT binary";

    #[test]
    fn groups_statements_by_instruction() {
        let statements = parse_recipe(DOCKERFILE);

        assert_eq!(statements.instruction_count(), 4);
        assert_eq!(statements.get("COPY").len(), 2);
        assert_eq!(statements.get("RUN").len(), 2);
        assert_eq!(statements.get("ENTRYPOINT"), [vec!["binary".to_string()]]);
    }

    #[test]
    fn keeps_from_statements_in_file_order() {
        let statements = parse_recipe(DOCKERFILE);
        let from = statements.get(FROM);

        assert_eq!(from.len(), 2);
        assert_eq!(from[0], ["docker/image:latest", "as", "base"]);
        assert_eq!(from[1], ["base"]);
    }

    #[test]
    fn does_not_join_continuation_lines() {
        let statements = parse_recipe(DOCKERFILE);
        assert_eq!(statements.get("RUN")[0], ["package", "update", "&&", "\\"]);
    }

    #[test]
    fn keeps_bare_instructions_with_no_arguments() {
        let statements = parse_recipe("FROM\nFROM alpine");
        let from = statements.get(FROM);

        assert_eq!(from.len(), 2);
        assert!(from[0].is_empty());
    }

    #[test]
    fn skips_comments_and_unknown_lines() {
        let statements = parse_recipe("# FROM commented\nnot an instruction\n\n   \n");
        assert!(statements.is_empty());
        assert!(statements.get(FROM).is_empty());
    }
}
