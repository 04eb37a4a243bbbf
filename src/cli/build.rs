use clap::Parser;
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build from satchel.yaml into dist/:\n    satchel build\n\n\
                  Use another descriptor:\n    satchel build -f packaging/satchel.yaml\n\n\
                  Write the artifact elsewhere:\n    satchel build -o /tmp/artifacts")]
pub struct BuildArgs {
    /// Package descriptor, relative to the source root
    #[arg(long, short = 'f', value_name = "FILE", default_value = "satchel.yaml")]
    pub file: PathBuf,

    /// Output directory, relative to the source root
    #[arg(long = "out-dir", short = 'o', value_name = "DIR", default_value = "dist")]
    pub out_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing_build_defaults() {
        let cli = Cli::try_parse_from(["satchel", "build"]).unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.file, PathBuf::from("satchel.yaml"));
                assert_eq!(args.out_dir, PathBuf::from("dist"));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_parsing_build_with_options() {
        let cli =
            Cli::try_parse_from(["satchel", "build", "-f", "pkg.yaml", "--out-dir", "out"]).unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.file, PathBuf::from("pkg.yaml"));
                assert_eq!(args.out_dir, PathBuf::from("out"));
            }
            _ => panic!("Expected Build command"),
        }
    }
}
