use clap::crate_version;

use wandkit::{
    Angle, Density, DensityUnit, Drawable, DrawableSkewX, Parse, Session, TransformContext,
};

use std::io::{self, Write};

#[derive(Debug)]
pub struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! impl_error_from {
    ($err:ty) => {
        impl From<$err> for Error {
            fn from(e: $err) -> Self {
                Self(format!("{e}"))
            }
        }
    };
}

impl_error_from!(io::Error);

macro_rules! error {
    ($($arg:tt)*) => (Error(std::format!($($arg)*)));
}

pub fn build_cli() -> clap::Command {
    clap::Command::new("wandkit")
        .version(concat!("version ", crate_version!()))
        .about("Inspect image densities and drawing commands")
        .disable_version_flag(true)
        .arg_required_else_help(true)
        .arg(
            clap::Arg::new("version")
                .short('v')
                .long("version")
                .help("Display the version information")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            clap::Command::new("density")
                .about("Parse density specifications and print them in canonical form")
                .arg(
                    clap::Arg::new("units")
                        .short('u')
                        .long("units")
                        .num_args(1)
                        .value_name("cm|inch")
                        .value_parser(parse_units)
                        .help("Convert the densities to these units")
                        .action(clap::ArgAction::Set),
                )
                .arg(
                    clap::Arg::new("SPEC")
                        .help("Density specification, like \"300x300 inch\"")
                        .required(true)
                        .num_args(1..)
                        .action(clap::ArgAction::Append),
                ),
        )
        .subcommand(
            clap::Command::new("skew-x")
                .about("Print the transformation matrix of a horizontal skew")
                .arg(
                    clap::Arg::new("ANGLE")
                        .help("Skew angle; a bare number is in degrees")
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(parse_angle),
                ),
        )
}

fn parse_units(v: &str) -> Result<DensityUnit, String> {
    v.parse::<DensityUnit>()
        .map_err(|_| format!("Invalid value '{v}': supported units are cm, inch"))
}

fn parse_angle(v: &str) -> Result<Angle, String> {
    <Angle as Parse>::parse_str(v)
        .map_err(|_| format!("Invalid value: The argument '{v}' can not be parsed as an angle"))
}

fn print_densities(specs: &[String], units: Option<DensityUnit>) -> Result<(), Error> {
    let mut stdout = io::stdout().lock();

    for spec in specs {
        let density = Density::parse(spec).map_err(|e| error!("Error parsing density: {}", e))?;

        let density = match units {
            Some(u) => density.change_units(u),
            None => density,
        };

        writeln!(stdout, "{density}")?;
    }

    Ok(())
}

fn print_skew_x(angle: Angle) -> Result<(), Error> {
    let mut ctx = TransformContext::new(Session::new());
    DrawableSkewX::new(angle.degrees()).draw(Some(&mut ctx));

    println!("{}", ctx.transform());
    Ok(())
}

fn run() -> Result<(), Error> {
    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        println!("wandkit version {}", crate_version!());
        return Ok(());
    }

    match matches.subcommand() {
        Some(("density", m)) => {
            let specs: Vec<String> = m
                .get_many::<String>("SPEC")
                .expect("SPEC is required")
                .cloned()
                .collect();
            let units = m.get_one::<DensityUnit>("units").copied();

            print_densities(&specs, units)
        }

        Some(("skew-x", m)) => {
            let angle = *m.get_one::<Angle>("ANGLE").expect("ANGLE is required");

            print_skew_x(angle)
        }

        _ => unreachable!("clap should already have rejected unknown subcommands"),
    }
}

fn main() {
    if let Err(e) = run() {
        std::eprintln!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn parses_units_argument() {
        assert_eq!(parse_units("CM"), Ok(DensityUnit::PixelsPerCentimeter));
        assert!(parse_units("dpi").is_err());
    }

    #[test]
    fn parses_angle_argument() {
        assert_eq!(parse_angle("45deg"), Ok(Angle::from_degrees(45.0)));
        assert!(parse_angle("45 deg").is_err());
    }
}
