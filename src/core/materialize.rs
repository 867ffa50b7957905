//! Turn raw command templates into argument vectors.
//!
//! Templates are split on the literal space character with no quoting
//! rules, so a single argument can never contain a space.

/// One vector per command: `[module_dir, token, token, ...]`.
pub fn materialize(module_dir: &str, commands: &[String]) -> Vec<Vec<String>> {
    commands
        .iter()
        .map(|command| {
            std::iter::once(module_dir.to_string())
                .chain(command.split(' ').map(str::to_string))
                .collect()
        })
        .collect()
}
