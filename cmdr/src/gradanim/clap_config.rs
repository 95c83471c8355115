// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser};
use gradanim_core::{DEFAULT_DURATION_SECS, DEFAULT_FPS, DEFAULT_GRADIENT_RESOLUTION};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "gradanim")]
#[command(about = "🌈 Turn a handful of CSS linear gradients into a smooth @keyframes animation")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  gradanim \x1b[32m--name <NAME> --gradients <POS> <GRADIENT> <POS> <GRADIENT> ...\x1b[0m [\x1b[34moptions\x1b[0m]\n\nEXAMPLE:\n  gradanim -n glow -g 0% \"linear-gradient(30deg, #3d3393 0%, #35eb93 100%)\" 100% \"linear-gradient(20deg, #6e45e2 0%, #88d3ce 100%)\"\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        long,
        short = 'n',
        help = "Name of the animation, used after `@keyframes` and as the output file name"
    )]
    pub name: String,

    #[arg(
        long,
        short = 'd',
        default_value_t = DEFAULT_DURATION_SECS,
        allow_negative_numbers = true,
        help = "Duration of the animation in seconds, used w/ `--fps` to get the keyframe count"
    )]
    pub duration: f64,

    #[arg(long, short = 'f', default_value_t = DEFAULT_FPS, help = "Keyframes per second")]
    pub fps: u32,

    #[arg(
        long,
        short = 'k',
        help = "Number of steps between the first and last keyframe, overrides `--duration * --fps`"
    )]
    pub keyframes: Option<u32>,

    #[arg(
        long,
        short = 'r',
        default_value_t = DEFAULT_GRADIENT_RESOLUTION,
        help = "Number of steps between the first and last color stop of each gradient"
    )]
    pub resolution: u32,

    #[arg(
        long,
        short = 'g',
        required = true,
        num_args = 2..,
        value_names = ["POS", "GRADIENT"],
        help = "Pairs of timeline position and gradient, eg: `0% \"linear-gradient(...)\" 100% \"linear-gradient(...)\"`"
    )]
    pub gradients: Vec<String>,

    #[arg(
        long,
        short = 'o',
        default_value = ".",
        help = "Directory to write `<NAME>.css` to"
    )]
    pub out_dir: PathBuf,

    #[arg(long, help = "Print the animation to stdout instead of writing a file")]
    pub stdout: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}
