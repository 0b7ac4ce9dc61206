use clap::Parser;

/// CLI arguments for geoshapes
///
/// The tool takes no options: the dataset URL, timeout and country list are
/// fixed. Only `--help` and `--version` are recognised; anything else on the
/// command line is accepted and ignored.
#[derive(Debug, Parser)]
#[command(
    name = "geoshapes",
    version,
    about = "Print Natural Earth country boundaries as a lean GeoJSON FeatureCollection keyed by ISO alpha-3"
)]
pub struct CliArgs {
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _ignored: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn accepts_no_arguments() {
        assert!(CliArgs::try_parse_from(["geoshapes"]).is_ok());
    }

    #[test]
    fn extra_arguments_are_ignored() {
        assert!(CliArgs::try_parse_from(["geoshapes", "bogus"]).is_ok());
        assert!(CliArgs::try_parse_from(["geoshapes", "world.json", "out.json"]).is_ok());
        assert!(CliArgs::try_parse_from(["geoshapes", "--filter", "DE"]).is_ok());
    }

    #[test]
    fn help_and_version_still_work() {
        let help = CliArgs::try_parse_from(["geoshapes", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

        let version = CliArgs::try_parse_from(["geoshapes", "--version"]).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
