//! Motion-Inject - synthesize and dispatch a single motion event
//!
//! Builds one event from the command line and hands it to the desktop
//! input simulator (`--inject`) or to an in-memory sink for a dry run.

use clap::Parser;
use motion_inject::{
    Action, Clock, Config, InjectionSink, InputSimulator, MotionInjectError, PointerType,
    RecordingSink, UptimeClock,
};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Synthesize one multi-pointer motion event
#[derive(Parser, Debug)]
#[command(name = "motion-inject")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Action (down, up, move, cancel, pointer-down, pointer-up, ...)
    #[arg(short, long, default_value = "down")]
    action: Action,

    /// Active pointer as X,Y; repeat for each pointer in order
    #[arg(short, long = "pointer", value_parser = parse_pointer)]
    pointers: Vec<(f32, f32)>,

    /// Pointer type (touch, pen, mouse)
    #[arg(short = 't', long, default_value = "touch")]
    pointer_type: PointerType,

    /// Gesture start time in milliseconds (defaults to now)
    #[arg(long)]
    down_time: Option<i64>,

    /// Event time in milliseconds (0 resolves to the time of dispatch)
    #[arg(long, default_value_t = 0)]
    event_time: i64,

    #[arg(long, default_value_t = 0)]
    meta_state: i32,

    #[arg(long, default_value_t = 0)]
    button_state: i32,

    #[arg(long, default_value_t = 0)]
    edge_flags: i32,

    #[arg(long, default_value_t = 0)]
    device_id: i32,

    /// Input source (defaults to the pointer type's source)
    #[arg(long)]
    source: Option<i32>,

    /// Inject through the desktop mouse instead of a dry run
    #[arg(long)]
    inject: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_pointer(s: &str) -> Result<(f32, f32), MotionInjectError> {
    let invalid = || MotionInjectError::Parse {
        kind: "pointer",
        value: s.to_string(),
    };
    let (x, y) = s.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<f32>().map_err(|_| invalid())?;
    let y = y.trim().parse::<f32>().map_err(|_| invalid())?;
    Ok((x, y))
}

fn main() -> Result<(), MotionInjectError> {
    let cli = Cli::parse();

    let mut config = Config::default()
        .with_pointer_type(cli.pointer_type)
        .with_device_id(cli.device_id)
        .with_verbose(cli.verbose);
    if let Some(source) = cli.source {
        config = config.with_source(source);
    }

    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(if config.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .compact()
        .init();

    UptimeClock::init();
    info!(
        "Config: pointer_type={}, source={:#x}, device={}",
        config.pointer_type,
        config.resolved_source(),
        config.device_id
    );

    let (x, y): (Vec<f32>, Vec<f32>) = cli.pointers.iter().copied().unzip();
    let down_time = cli.down_time.unwrap_or_else(|| UptimeClock.now_millis());

    let runner = config
        .builder()
        .with_action(cli.action)
        .with_x(x)
        .with_y(y)
        .with_down_time(down_time)
        .with_event_time(cli.event_time)
        .with_meta_state(cli.meta_state)
        .with_button_state(cli.button_state)
        .with_edge_flags(cli.edge_flags)
        .build();

    let mut sink: Box<dyn InjectionSink> = if cli.inject {
        info!("Injecting through the desktop input simulator");
        Box::new(InputSimulator::new())
    } else {
        info!("Dry run - event is recorded, not injected");
        Box::new(RecordingSink::new())
    };

    match runner.run(&mut sink) {
        Ok(Some(event)) => {
            info!(
                "Dispatched action {:#x} with {} pointer(s) at t={}",
                event.action(),
                event.pointer_count(),
                event.event_time()
            );
            for (props, coords) in event.pointers() {
                info!(
                    "  pointer {}: ({}, {}) tool={:?}",
                    props.id, coords.x, coords.y, props.tool_type
                );
            }
        }
        Ok(None) => info!("No pointers given - nothing to inject"),
        Err(e) => {
            error!("Failed to dispatch event: {}", e);
            return Err(e);
        }
    }

    Ok(())
}
