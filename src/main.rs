// SPDX-License-Identifier: MPL-2.0
//! Terminal demo: plays a short scripted visit against the page components.

use folio_fx::app::{paths, App, Flags, Message};
use folio_fx::application::port::{
    ContactMessage, FormSubmitter, PreferenceStore, Scheduler, Surface, TextSink,
};
use folio_fx::config;
use folio_fx::infrastructure::submitter::SIMULATED_DELIVERY;
use folio_fx::infrastructure::{
    FilePreferences, MemoryPreferences, SimulatedSubmitter, TerminalLine, TerminalSurface,
    TokioScheduler, VirtualScheduler,
};
use folio_fx::ui::analytics::ClickTarget;
use folio_fx::ui::contact_form;
use folio_fx::ui::konami;
use folio_fx::ui::navigation::{self, Section};
use folio_fx::ui::notifications::{Severity, ToastView};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_RUN_SECONDS: u64 = 15;

const HELP: &str = "\
folio_fx - portfolio page interactions demo

USAGE:
  folio_fx [OPTIONS]

OPTIONS:
  --simulate           Run on a virtual clock instead of wall time
  --seconds N          Length of the visit in seconds (default 15)
  --config-dir DIR     Directory holding settings.toml
  --data-dir DIR       Directory holding preferences and downloads
  -h, --help           Print this help
";

/// Visitor actions played by the demo.
#[derive(Debug, Clone, Copy)]
enum Action {
    Welcome,
    BrowseToAbout,
    EnterKonamiCode,
    ToggleTheme,
    SubmitContact,
    DownloadResume,
}

/// (milliseconds since start, action)
const SCRIPT: [(u64, Action); 6] = [
    (2_500, Action::Welcome),
    (3_000, Action::BrowseToAbout),
    (4_000, Action::EnterKonamiCode),
    (6_000, Action::ToggleTheme),
    (7_000, Action::SubmitContact),
    (12_000, Action::DownloadResume),
];

/// Where the resume is read from and saved to.
struct Locations {
    assets: PathBuf,
    downloads: PathBuf,
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let (config, config_warning) = config::load();
    let mut warnings: Vec<String> = config_warning.into_iter().collect();

    let locations = Locations {
        assets: std::env::current_dir().unwrap_or_default(),
        downloads: paths::get_app_data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("downloads"),
    };
    let run_for = Duration::from_secs(flags.seconds.unwrap_or(DEFAULT_RUN_SECONDS));
    let sink = TerminalLine::stdout("title> ");

    match FilePreferences::open() {
        Ok((preferences, warning)) => {
            warnings.extend(warning);
            let app = App::new(config, preferences, sink);
            run(app, &warnings, &flags, run_for, &locations)
        }
        Err(err) => {
            tracing::warn!(error = %err, "preferences will not be saved");
            let app = App::new(config, MemoryPreferences::new(), sink);
            run(app, &warnings, &flags, run_for, &locations)
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        simulate: args.contains("--simulate"),
        seconds: args.opt_value_from_str("--seconds")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    })
}

fn run<T: TextSink, P: PreferenceStore>(
    app: App<T, P>,
    warnings: &[String],
    flags: &Flags,
    run_for: Duration,
    locations: &Locations,
) -> ExitCode {
    if flags.simulate {
        run_simulated(app, warnings, run_for, locations);
        return ExitCode::SUCCESS;
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(error = %err, "failed to start runtime");
            return ExitCode::FAILURE;
        }
    };
    runtime.block_on(run_live(app, warnings, run_for, locations));
    ExitCode::SUCCESS
}

/// Plays the script on a virtual clock as fast as possible.
fn run_simulated<T: TextSink, P: PreferenceStore>(
    mut app: App<T, P>,
    warnings: &[String],
    run_for: Duration,
    locations: &Locations,
) {
    let mut scheduler = VirtualScheduler::<Message>::new();
    let mut surface = TerminalSurface::stdout();
    app.boot(warnings, &mut scheduler, &mut surface);

    let mut script = SCRIPT
        .iter()
        .map(|&(ms, action)| (Duration::from_millis(ms), action))
        .filter(|&(at, _)| at <= run_for)
        .peekable();

    loop {
        let next_event = scheduler.next_deadline().filter(|&at| at <= run_for);
        let next_action = script.peek().map(|&(at, _)| at);

        match (next_event, next_action) {
            (Some(event_at), Some(action_at)) if event_at <= action_at => {
                deliver_next(&mut app, &mut scheduler, &mut surface, run_for);
            }
            (_, Some(action_at)) => {
                scheduler.settle_at(action_at);
                if let Some((_, action)) = script.next() {
                    if let Some(payload) =
                        perform(&mut app, action, &mut scheduler, &mut surface, locations)
                    {
                        tracing::debug!(subject = %payload.subject, "simulating delivery");
                        scheduler.after(
                            SIMULATED_DELIVERY,
                            contact_form::Message::Completed(Ok(())).into(),
                        );
                    }
                }
            }
            (Some(_), None) => deliver_next(&mut app, &mut scheduler, &mut surface, run_for),
            (None, None) => break,
        }
    }
    tracing::info!(elapsed = ?scheduler.elapsed(), "simulation finished");
}

fn deliver_next<T: TextSink, P: PreferenceStore, R: Surface<ToastView>>(
    app: &mut App<T, P>,
    scheduler: &mut VirtualScheduler<Message>,
    surface: &mut R,
    horizon: Duration,
) {
    if let Some(message) = scheduler.next_due(horizon) {
        app.update(message, scheduler, surface);
    }
}

/// Plays the script in wall-clock time on a tokio runtime.
async fn run_live<T: TextSink, P: PreferenceStore>(
    mut app: App<T, P>,
    warnings: &[String],
    run_for: Duration,
    locations: &Locations,
) {
    let (mut scheduler, mut events) = TokioScheduler::new();
    let mut surface = TerminalSurface::stdout();
    let submitter = SimulatedSubmitter::new();

    let started = tokio::time::Instant::now();
    let finish = started + run_for;
    app.boot(warnings, &mut scheduler, &mut surface);

    let mut script = SCRIPT.iter();
    let mut next = script.next();

    loop {
        let action_at = next.map(|&(ms, _)| started + Duration::from_millis(ms));

        tokio::select! {
            () = tokio::time::sleep_until(finish) => break,
            Some(message) = events.recv() => {
                app.update(message, &mut scheduler, &mut surface);
            }
            () = tokio::time::sleep_until(action_at.unwrap_or(finish)), if action_at.is_some() => {
                if let Some(&(_, action)) = next {
                    if let Some(payload) =
                        perform(&mut app, action, &mut scheduler, &mut surface, locations)
                    {
                        let sender = scheduler.sender();
                        let submitter = submitter.clone();
                        tokio::spawn(async move {
                            let result = submitter.submit(payload).await;
                            // The demo may have ended while delivery was in flight.
                            let _ = sender.send(contact_form::Message::Completed(result).into());
                        });
                    }
                }
                next = script.next();
            }
        }
    }
    tracing::info!("visit finished");
}

/// Applies one visitor action. Returns a contact payload to deliver, if any.
fn perform<T, P, S, R>(
    app: &mut App<T, P>,
    action: Action,
    scheduler: &mut S,
    surface: &mut R,
    locations: &Locations,
) -> Option<ContactMessage>
where
    T: TextSink,
    P: PreferenceStore,
    S: Scheduler<Event = Message>,
    R: Surface<ToastView>,
{
    tracing::info!(?action, "visitor action");
    match action {
        Action::Welcome => {
            app.notify("Welcome to my portfolio!", Severity::Info, scheduler, surface);
            None
        }
        Action::BrowseToAbout => {
            let sections = demo_sections();
            app.toggle_nav_menu();
            app.clicked(&ClickTarget::NavLink("About".to_string()), true);
            let target = navigation::scroll_target(&sections[1]);
            let state = app.scrolled(&sections, target);
            tracing::info!(
                section = ?state.active_section,
                scrolled = state.scrolled,
                "scrolled to link target"
            );
            None
        }
        Action::EnterKonamiCode => {
            for key in konami::SEQUENCE {
                app.key_pressed(key, scheduler, surface);
            }
            None
        }
        Action::ToggleTheme => {
            app.toggle_theme(scheduler, surface);
            tracing::info!(theme = app.theme().mode().as_str(), "theme is now");
            None
        }
        Action::SubmitContact => {
            let fields = app.contact_form_mut().fields_mut();
            fields.name = "Demo Visitor".to_string();
            fields.email = "visitor@example.com".to_string();
            fields.subject = "Hello".to_string();
            fields.body = "Enjoyed the page!".to_string();
            app.submit_contact()
        }
        Action::DownloadResume => {
            if let Some(path) =
                app.download_resume(&locations.assets, &locations.downloads, scheduler, surface)
            {
                tracing::info!(path = %path.display(), "resume saved");
            }
            None
        }
    }
}

/// Section layout of the demo page.
fn demo_sections() -> [Section; 4] {
    [
        Section::new("home", 0.0, 900.0),
        Section::new("about", 900.0, 700.0),
        Section::new("projects", 1600.0, 1200.0),
        Section::new("contact", 2800.0, 600.0),
    ]
}
