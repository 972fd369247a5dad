use std::process::ExitCode;

mod menu;

#[tokio::main]
async fn main() -> ExitCode {
	env_logger::init();

	/* Parse console input */
	let target = {
		let args: Vec<String> = std::env::args().collect();

		let mut opts = getopts::Options::new();
		opts.optopt("p", "", "Project directory to inspect, defaults to the current directory", "PATH");
		opts.optflag("h", "help", "Show help");

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m) => m,
			Err(e) => {
				eprintln!("Unable to parse options: {}", e);
				eprintln!("{}", opts.usage("Usage: midgardr [-p PATH]"));
				return ExitCode::FAILURE;
			}
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage("Usage: midgardr [-p PATH]"));
			return ExitCode::SUCCESS;
		}

		let cwd = match std::env::current_dir() {
			Ok(cwd) => cwd,
			Err(e) => {
				log::error!("Unable to determine working directory: {}", e);
				return ExitCode::FAILURE;
			}
		};

		match parsed_options.opt_str("p") {
			Some(p) => cwd.join(p),
			None => cwd,
		}
	};

	match run(&target).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			log::error!("{}", e);
			eprintln!("{}", console::style(format!("✗ {}", e)).red());
			ExitCode::FAILURE
		}
	}
}

async fn run(target: &std::path::Path) -> Result<(), Error> {
	let config = midgardr::Config::load_from_disk().unwrap_or_else(|e| {
		log::warn!("Failed to read config file: {}", e);
		log::warn!("Using default config.");
		midgardr::Config::default()
	});

	let client = midgardr::remote::client()?;
	let state = midgardr::ProjectState::gather(target, &config, &client).await;
	let items = midgardr::resolve(&state, config.premium);

	println!("{}", console::style(format!("\nMIÐGARÐR UI {}", if config.premium { "- PREMIUM" } else { "" })).cyan().bold());
	let context = target.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_else(|| target.display().to_string());
	println!("{}", console::style(format!("Context: {}\n", context)).dim());

	let action = menu::select(&items, &state)?;
	log::debug!("Selected {}", action);

	let dispatcher = midgardr::Dispatcher::new(
		config.commands.clone(),
		midgardr::dispatch::ProcessRunner,
		menu::TerminalPrompt,
		std::env::current_dir()?,
	);

	if let Some(notice) = menu::notice(action, &state) {
		println!("{}", console::style(notice).dim());
	}

	match dispatcher.dispatch(action, target, &state).await? {
		midgardr::Outcome::Completed => {
			if action == midgardr::Action::CreateNewProject {
				println!("{}", console::style("\n✔ Created new project!").green());
			}
		}
		midgardr::Outcome::Exit => {}
	}

	Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{0}")]
	Midgardr(#[from] midgardr::Error),
	#[error("menu error: {0}")]
	Menu(#[from] dialoguer::Error),
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
}
