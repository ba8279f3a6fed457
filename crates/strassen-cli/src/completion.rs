//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Generate shell completion script.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, "strassen", out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Arg;

    fn command() -> Command {
        Command::new("strassen").arg(Arg::new("threshold").long("threshold"))
    }

    #[test]
    fn generate_bash_completion() {
        let mut buf = Vec::new();
        generate_completion(&mut command(), Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("strassen"));
        assert!(script.contains("--threshold"));
    }

    #[test]
    fn generate_zsh_completion() {
        let mut buf = Vec::new();
        generate_completion(&mut command(), Shell::Zsh, &mut buf);
        assert!(!buf.is_empty());
    }
}
