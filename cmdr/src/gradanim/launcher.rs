// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use gradanim_core::{AnimationArgs, KeyframeCount, RawTimedGradient, try_generate_animation};
use miette::{Context, IntoDiagnostic};

use crate::gradanim::CLIArg;

/// Where the generated CSS ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    File(PathBuf),
    Stdout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub css: String,
    pub destination: Destination,
}

/// Converts the command line args into the raw config that [`try_generate_animation`]
/// takes. An explicit `--keyframes` count wins over `--duration * --fps`.
///
/// # Errors
///
/// Returns an error if `--gradients` doesn't have a gradient after every position.
pub fn try_build_animation_args(cli_arg: &CLIArg) -> miette::Result<AnimationArgs> {
    let gradients = RawTimedGradient::try_from_flat_pairs(cli_arg.gradients.as_slice())?;

    let keyframe_count = match cli_arg.keyframes {
        Some(count) => KeyframeCount::Explicit(count),
        None => KeyframeCount::FromDuration {
            duration_secs: cli_arg.duration,
            fps: cli_arg.fps,
        },
    };

    Ok(AnimationArgs {
        animation_name: cli_arg.name.clone(),
        gradients,
        keyframe_count,
        gradient_resolution: cli_arg.resolution,
    })
}

/// Generates the animation, and then either prints it to stdout (`--stdout`) or writes it
/// to `<out_dir>/<name>.css`.
///
/// # Errors
///
/// Returns an error if the args are invalid, or the output file can't be written.
pub fn try_run(cli_arg: &CLIArg) -> miette::Result<RunReport> {
    let args = try_build_animation_args(cli_arg)?;
    let css = try_generate_animation(args)?;

    if cli_arg.stdout {
        println!("{css}");
        return Ok(RunReport {
            css,
            destination: Destination::Stdout,
        });
    }

    let output_path = cli_arg.out_dir.join(format!("{}.css", cli_arg.name));
    std::fs::write(&output_path, &css)
        .into_diagnostic()
        .wrap_err_with(|| format!("Could not write `{}`", output_path.display()))?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "Wrote animation",
        output_path = %output_path.display(),
        bytes = css.len()
    );

    Ok(RunReport {
        css,
        destination: Destination::File(output_path),
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gradanim_core::{AnimError, ConfigError, DEFAULT_DURATION_SECS, DEFAULT_FPS,
                        assert_eq2};
    use gradanim_test_fixtures::try_create_temp_dir;
    use test_case::test_case;

    use super::*;

    const GRADIENT_1: &str = "linear-gradient(30deg, #3d3393 0%, #35eb93 100%)";
    const GRADIENT_2: &str = "linear-gradient(20deg, #6e45e2 0%, #88d3ce 100%)";

    fn cli_arg(extra_args: &[&str]) -> CLIArg {
        let mut args = vec!["gradanim", "-n", "glow"];
        args.extend_from_slice(extra_args);
        args.extend_from_slice(&["-g", "0%", GRADIENT_1, "100%", GRADIENT_2]);
        CLIArg::try_parse_from(args).unwrap()
    }

    #[test_case(&["-d", "2", "-f", "12"], KeyframeCount::FromDuration { duration_secs: 2.0, fps: 12 } ; "from duration and fps")]
    #[test_case(&[], KeyframeCount::FromDuration { duration_secs: DEFAULT_DURATION_SECS, fps: DEFAULT_FPS } ; "from defaults")]
    #[test_case(&["-d", "2", "-k", "5"], KeyframeCount::Explicit(5) ; "explicit count wins over duration")]
    #[test_case(&["-k", "0"], KeyframeCount::Explicit(0) ; "explicit zero is passed through")]
    fn test_keyframe_count(extra_args: &[&str], expected: KeyframeCount) {
        let args = try_build_animation_args(&cli_arg(extra_args)).unwrap();
        assert_eq2!(args.keyframe_count, expected);
        assert_eq2!(args.animation_name, "glow");
        assert_eq2!(args.gradients.len(), 2);
    }

    #[test]
    fn test_unpaired_gradients() {
        let cli_arg = CLIArg::try_parse_from(["gradanim", "-n", "glow", "-g", "0%", GRADIENT_1, "100%"])
            .unwrap();
        let report = try_build_animation_args(&cli_arg).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<ConfigError>(),
            Some(&ConfigError::UnpairedGradientArgument {
                position: "100%".to_string()
            })
        );
    }

    #[test]
    fn test_try_run_writes_css_file() {
        let temp_dir = try_create_temp_dir().unwrap();
        let out_dir = temp_dir.to_string_lossy().to_string();

        let report = try_run(&cli_arg(&["-k", "24", "-o", out_dir.as_str()])).unwrap();

        let expected_path = temp_dir.join("glow.css");
        assert_eq2!(report.destination, Destination::File(expected_path.clone()));
        assert_eq2!(std::fs::read_to_string(expected_path).unwrap(), report.css);
        assert_eq2!(report.css.matches("background-image").count(), 25);
    }

    #[test]
    fn test_try_run_with_too_few_keyframes() {
        let temp_dir = try_create_temp_dir().unwrap();
        let out_dir = temp_dir.to_string_lossy().to_string();

        let report = try_run(&cli_arg(&["-d", "0", "-o", out_dir.as_str()])).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<AnimError>(),
            Some(&AnimError::Config(ConfigError::ZeroKeyframeCount))
        );
        assert!(!temp_dir.join("glow.css").exists());
    }

    #[test_case("../escaped" ; "parent directory")]
    #[test_case("nested/escaped" ; "path separator")]
    fn test_try_run_rejects_name_that_is_a_path(name: &str) {
        let temp_dir = try_create_temp_dir().unwrap();
        let out_dir = temp_dir.join("out");
        std::fs::create_dir(&out_dir).unwrap();
        let out_dir = out_dir.to_string_lossy().to_string();

        let cli_arg = CLIArg::try_parse_from([
            "gradanim",
            "-n",
            name,
            "-o",
            out_dir.as_str(),
            "-g",
            "0%",
            GRADIENT_1,
            "100%",
            GRADIENT_2,
        ])
        .unwrap();
        let report = try_run(&cli_arg).unwrap_err();

        assert_eq2!(
            report.downcast_ref::<AnimError>(),
            Some(&AnimError::Config(ConfigError::InvalidAnimationName {
                name: name.to_string()
            }))
        );
        assert!(!temp_dir.join("escaped.css").exists());
        assert!(!temp_dir.join("out").join("nested").exists());
    }

    #[test]
    fn test_try_run_into_missing_dir() {
        let temp_dir = try_create_temp_dir().unwrap();
        let out_dir = temp_dir.join("does_not_exist").to_string_lossy().to_string();

        let report = try_run(&cli_arg(&["-o", out_dir.as_str()])).unwrap_err();
        assert!(report.to_string().starts_with("Could not write"));
    }
}
