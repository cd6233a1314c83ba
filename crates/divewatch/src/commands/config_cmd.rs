//! Config subcommand handlers.

use divewatch_config::{self as config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(
                &global.output,
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_else(|e| format!("{c:#?}\n# {e}")),
                |c| c.profiles.keys().cloned().collect::<Vec<_>>().join("\n"),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let gateway = global.gateway.as_deref().ok_or_else(|| CliError::Validation {
                field: "gateway".into(),
                reason: "pass the gateway address with --gateway <url>".into(),
            })?;
            let url = config::parse_gateway_url(gateway)?;
            let profile_name = global.profile.clone().unwrap_or_else(|| "default".into());

            let mut cfg = config::load_config_or_default();
            if cfg.profiles.contains_key(&profile_name) && !force {
                return Err(CliError::ProfileExists { name: profile_name });
            }

            cfg.profiles
                .insert(profile_name.clone(), Profile::new(url.as_str()));
            if cfg.profiles.len() == 1 || cfg.default_profile.is_none() {
                cfg.default_profile = Some(profile_name.clone());
            }

            let path = config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Configuration written to {}", path.display());
                eprintln!("  Profile: {profile_name} -> {url}");
            }
            Ok(())
        }
    }
}
