//! Pogo Hero headless runner
//!
//! Replays a scripted input timeline against the course at a fixed frame
//! rate and reports how the run went. Useful for tuning without a renderer.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use pogo_hero::platform::Key;
    use pogo_hero::script::InputScript;
    use pogo_hero::sim::{Level, StatusKind};
    use pogo_hero::{Session, Tuning};

    #[derive(Debug, Parser)]
    #[command(name = "pogo-hero", about = "Replay a pogo run without a renderer")]
    struct Args {
        /// JSON file overriding physics tuning
        #[arg(long, env = "POGO_HERO_TUNING")]
        tuning: Option<PathBuf>,

        /// JSON input script (defaults to a built-in demo)
        #[arg(long)]
        script: Option<PathBuf>,

        /// Simulated frames per second
        #[arg(long, default_value_t = 60)]
        fps: u32,

        /// Keep stepping after the run ends until the script runs out
        #[arg(long)]
        full: bool,

        /// Print the final frame as JSON
        #[arg(long)]
        json: bool,
    }

    pub fn run() -> pogo_hero::Result<()> {
        let args = Args::parse();

        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let script = match &args.script {
            Some(path) => InputScript::load(path)?,
            None => {
                log::info!("No script given, replaying the demo run");
                InputScript::demo()
            }
        };

        let frame_ms = 1000.0 / f64::from(args.fps.max(1));
        log::info!(
            "Replaying {} frames at {} fps",
            script.total_frames(),
            args.fps
        );

        let mut session = Session::new(Level::default(), tuning);
        let mut view = session.view();
        for (i, input) in script.inputs().enumerate() {
            let input_mut = session.input_mut();
            input_mut.clear();
            if input.left {
                input_mut.key_down(Key::Left);
            }
            if input.right {
                input_mut.key_down(Key::Right);
            }
            if input.charge {
                input_mut.key_down(Key::Charge);
            }
            if input.restart {
                input_mut.key_down(Key::Restart);
            }

            view = session.frame(i as f64 * frame_ms);
            if !args.full && view.hud.status != StatusKind::Alive {
                break;
            }
        }

        if args.json {
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            let hud = &view.hud;
            println!(
                "Health: {}  Energy: {}  Distance: {}m  Progress: {:.0}%",
                hud.health,
                hud.energy,
                hud.distance,
                view.progress * 100.0
            );
            if let Some(banner) = hud.banner() {
                println!("{banner}");
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> pogo_hero::Result<()> {
    env_logger::init();
    log::info!("Pogo Hero (headless) starting...");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `Session` directly
}
