use clap::Parser;
use std::path::PathBuf;

// Build version with toolkit info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "UI:     egui/eframe 0.33\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// UNIHOOK landing page: scroll-linked swap timeline with draggable cards
#[derive(Parser, Debug, Default)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Enable logging to file (default: unihook.log in the data directory)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Timeline container width cap in pixels
    #[arg(short = 'w', long = "width", value_name = "PX")]
    pub width: Option<f32>,

    /// Start with card dragging disabled
    #[arg(long = "no-drag")]
    pub no_drag: bool,

    /// Ignore saved settings and start from defaults
    #[arg(long = "reset")]
    pub reset: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["unihook"]).unwrap();
        assert_eq!(args.log_file, None);
        assert_eq!(args.verbosity, 0);
        assert!(!args.no_drag);
        assert!(!args.reset);
    }

    #[test]
    fn test_log_flag_with_and_without_file() {
        let args = Args::try_parse_from(["unihook", "--log"]).unwrap();
        assert_eq!(args.log_file, Some(None));

        let args = Args::try_parse_from(["unihook", "-l", "out.log", "-vv"]).unwrap();
        assert_eq!(args.log_file, Some(Some(PathBuf::from("out.log"))));
        assert_eq!(args.verbosity, 2);
    }

    #[test]
    fn test_layout_flags() {
        let args = Args::try_parse_from(["unihook", "--width", "720", "--no-drag", "--reset"]).unwrap();
        assert_eq!(args.width, Some(720.0));
        assert!(args.no_drag);
        assert!(args.reset);
    }
}
