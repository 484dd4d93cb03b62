use anyhow::Context;
use std::io::{self, BufRead};
use std::path::Path;

use careerboost_stepper::wizard::{OnboardingStore, PointerId};
use careerboost_stepper::{
    AppConfig, AppResult, AppShell, AppView, EventBus, StepModel, StepperCommand,
    StepperController,
};

/// Initialize tracing with daily file rotation
fn initialize_tracing(log_dir: &Path) {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Create log directory if it doesn't exist
    if let Err(e) = std::fs::create_dir_all(log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(log_dir, "careerboost-onboarding.log");

    // Configure filter (info level by default)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    // In debug builds, also log to the console. stdout carries the JSON
    // transcript so logs go to stderr.
    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    // In release builds, only log to file
    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Logging initialized, writing to {}", log_dir.display());
}

/// Parse one input line. `Ok(None)` means quit.
fn parse_command(line: &str) -> Result<Option<StepperCommand>, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err("Empty command".to_string());
    };

    let mut number = |what: &str| -> Result<f32, String> {
        parts
            .next()
            .ok_or_else(|| format!("Missing {}", what))?
            .parse::<f32>()
            .map_err(|e| format!("Invalid {}: {}", what, e))
    };

    let command = match verb {
        "next" | "n" => StepperCommand::Next,
        "prev" | "back" | "p" => StepperCommand::Previous,
        "go" => {
            let index = number("step index")?;
            if index < 0.0 || index.fract() != 0.0 {
                return Err(format!("Invalid step index: {}", index));
            }
            StepperCommand::GoTo {
                index: index as usize,
            }
        }
        "skip" => StepperCommand::Skip,
        "press" => StepperCommand::Press {
            pointer: PointerId::PRIMARY,
            x: number("x position")?,
        },
        "move" | "drag" => StepperCommand::Drag {
            pointer: PointerId::PRIMARY,
            x: number("x position")?,
        },
        "release" => StepperCommand::Release {
            pointer: PointerId::PRIMARY,
        },
        "settle" => StepperCommand::Settled,
        "quit" | "q" | "exit" => return Ok(None),
        other => return Err(format!("Unknown command: {}", other)),
    };

    Ok(Some(command))
}

fn print_step(stepper: &StepperController) -> AppResult<()> {
    let step = stepper.current_step();
    println!();
    println!("[{}/{}] {}", step.number(), stepper.steps().len(), step.title());
    println!("  {}", step.description());
    println!("  {}", step.tags().join(" · "));
    println!("{}", serde_json::to_string(&stepper.snapshot())?);
    Ok(())
}

fn main() -> AppResult<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    initialize_tracing(&config.log_dir());

    let args: Vec<String> = std::env::args().collect();
    let authenticated = args.iter().any(|a| a == "--authenticated");

    let store_path = config
        .onboarding_store_path()
        .context("No config directory for onboarding state")?;
    let store = OnboardingStore::new(store_path);
    if args.iter().any(|a| a == "--reset") {
        store.reset().context("Failed to reset onboarding state")?;
    }

    let bus = EventBus::new();
    let (events, _subscription) = bus.subscribe();

    let mut shell = AppShell::start(store, authenticated).with_event_bus(bus.clone());
    if shell.view() == AppView::Splash {
        println!("CareerBoost");
        shell.finish_splash();
    }
    if shell.view() != AppView::Onboarding {
        println!("Onboarding already completed. Run with --reset to see it again.");
        return Ok(());
    }

    let mut stepper = StepperController::new(StepModel::onboarding())
        .with_config(config.stepper.clone())
        .context("Invalid stepper configuration")?
        .with_event_bus(bus);

    println!("Commands: next, prev, go N, skip, press X, move X, release, settle, quit");
    print_step(&stepper)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => break,
            Err(message) => {
                eprintln!("✗ {}", message);
                continue;
            }
        };

        match stepper.dispatch(command) {
            Ok(result) => tracing::debug!("{:?}", result),
            Err(e) => eprintln!("✗ {}", e),
        }

        for event in events.try_iter() {
            println!("{}", serde_json::to_string(&event)?);
            if let Err(e) = shell.handle_event(&event) {
                tracing::error!("Failed to save onboarding state: {}", e);
                eprintln!("✗ {}", e);
            }
        }

        if shell.view() == AppView::Main {
            println!("Welcome to CareerBoost!");
            break;
        }

        print_step(&stepper)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_command("next"), Ok(Some(StepperCommand::Next)));
        assert_eq!(parse_command("back"), Ok(Some(StepperCommand::Previous)));
        assert_eq!(
            parse_command("go 3"),
            Ok(Some(StepperCommand::GoTo { index: 3 }))
        );
        assert_eq!(parse_command("quit"), Ok(None));
    }

    #[test]
    fn test_parse_gesture() {
        assert_eq!(
            parse_command("press 120"),
            Ok(Some(StepperCommand::Press {
                pointer: PointerId::PRIMARY,
                x: 120.0
            }))
        );
        assert_eq!(
            parse_command("release"),
            Ok(Some(StepperCommand::Release {
                pointer: PointerId::PRIMARY
            }))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("go").is_err());
        assert!(parse_command("go -1").is_err());
        assert!(parse_command("go 1.5").is_err());
        assert!(parse_command("press abc").is_err());
        assert!(parse_command("jump").is_err());
    }
}
