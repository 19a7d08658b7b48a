use std::path::PathBuf;

use clap::Parser;
use mazerunner::{
    logging,
    render::Renderer,
    session::Session,
    settings::{LogLevel, Settings},
    AppError,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazerunner")]
struct Args {
    #[clap(short, long, help = "Number of columns")]
    cols: Option<u16>,
    #[clap(short, long, help = "Number of rows")]
    rows: Option<u16>,
    #[clap(short, long, help = "Use the size of a preset from the settings")]
    preset: Option<String>,
    #[clap(long, help = "Seed of the maze, random if not given")]
    seed: Option<u64>,
    #[clap(short, long, action, help = "Find a path from the top left to the bottom right")]
    solve: bool,
    #[clap(long, action, help = "Print the maze in RON format instead of drawing it")]
    ron: bool,
    #[clap(long, action, help = "Don't use terminal colors")]
    plain: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More log output, repeatable")]
    verbose: u8,
    #[clap(long, help = "Path of the settings file")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.reset_config {
        return Settings::reset_config(settings_path);
    }

    better_panic::install();

    let settings = Settings::load(settings_path)?;
    let colored = settings.get_colored() && !args.plain;
    let level = if args.verbose > 0 {
        settings.get_log_level().max(LogLevel::Warn).raised(args.verbose)
    } else {
        settings.get_log_level()
    };
    logging::init(level.to_filter(), colored)?;

    let (cols, rows) = maze_size(&args, &settings)?;

    let mut session = Session::new();
    session.generate(cols as usize, rows as usize, args.seed)?;
    if args.solve {
        session.solve()?;
    }

    if args.ron {
        let out = ron::ser::to_string_pretty(
            &(session.maze(), session.path()),
            ron::ser::PrettyConfig::default(),
        )?;
        println!("{}", out);
        return Ok(());
    }

    let renderer = Renderer::new(colored);
    if let Some(view) = session.view() {
        print!("{}", renderer.grid(&view));
    }
    if let Some(seed) = session.seed() {
        println!("Seed: {}", seed);
    }

    if session.is_solved() {
        match session.path() {
            Some(path) if settings.get_show_path_list() => print!("{}", renderer.path_list(path)),
            Some(path) => println!("Path length: {}", path.len()),
            None => println!("No path found, the exit is not connected to the maze"),
        }
    }

    Ok(())
}

/// Size from the command line, a preset or the settings, in that order.
fn maze_size(args: &Args, settings: &Settings) -> Result<(u16, u16), AppError> {
    let (default_cols, default_rows) = match &args.preset {
        Some(title) => settings
            .find_preset(title)
            .map(|p| (p.cols, p.rows))
            .ok_or_else(|| AppError::UnknownPreset(title.clone()))?,
        None => settings.default_size(),
    };

    let cols = args.cols.unwrap_or(default_cols);
    let rows = args.rows.unwrap_or(default_rows);

    let limits = settings.get_size_limits();
    if !limits.contains(cols) || !limits.contains(rows) {
        return Err(AppError::SizeOutOfRange {
            cols,
            rows,
            min: limits.min,
            max: limits.max,
        });
    }

    Ok((cols, rows))
}

#[cfg(test)]
mod tests {
    use mazerunner::settings::{MazePreset, SizeLimits};

    use super::*;

    fn settings() -> Settings {
        Settings::new()
            .set_size_limits(SizeLimits { min: 2, max: 20 })
            .set_presets(vec![MazePreset {
                title: "Tall".to_string(),
                cols: 5,
                rows: 18,
                default: false,
            }])
    }

    #[test]
    fn size_from_args_and_preset() {
        let args = Args::parse_from(["mazerunner", "--cols", "4"]);
        assert_eq!(maze_size(&args, &settings()).unwrap(), (4, 10));

        let args = Args::parse_from(["mazerunner", "--preset", "tall", "-r", "3"]);
        assert_eq!(maze_size(&args, &settings()).unwrap(), (5, 3));
    }

    #[test]
    fn size_errors() {
        let args = Args::parse_from(["mazerunner", "--preset", "huge"]);
        assert!(matches!(
            maze_size(&args, &settings()),
            Err(AppError::UnknownPreset(_))
        ));

        let args = Args::parse_from(["mazerunner", "--cols", "21"]);
        assert!(matches!(
            maze_size(&args, &settings()),
            Err(AppError::SizeOutOfRange { cols: 21, .. })
        ));
    }
}
