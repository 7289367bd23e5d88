// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dualgraph CLI entrypoint.
//!
//! Replays a gesture script against both views and prints one JSON frame per step on stdout.
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::error::Error;
use std::io::Write;

use dualgraph::config::SyncConfig;
use dualgraph::replay::{ReplayScript, Replayer};
use dualgraph::view::ViewMode;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--config <file>] [--view planar|scene] <script.json>\n  {program} [--config <file>] [--view planar|scene] --demo\n\nEach step prints the active view's frame as one JSON line; the first line is the initial frame.\n--view overrides the config's initialView.\n--demo replays a built-in script against the built-in three-node graph."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    config: Option<String>,
    view: Option<ViewMode>,
    script: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--view" => {
                if options.view.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.view = Some(raw.parse().map_err(|_| ())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.script.is_some() {
                    return Err(());
                }
                options.script = Some(arg);
            }
        }
    }

    if options.demo == options.script.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "dualgraph".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();

        let config = match options.config.as_deref() {
            Some(path) => SyncConfig::load(path)?,
            None => SyncConfig::default(),
        };
        let mapper = config.mapper()?;
        let mode = options.view.unwrap_or(config.initial_view);

        let script = match options.script.as_deref() {
            Some(path) => ReplayScript::from_json_str(&std::fs::read_to_string(path)?)?,
            None => ReplayScript::demo()?,
        };
        let mut replayer = Replayer::new(script.seed_store()?, mapper, mode);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer(&mut out, &replayer.render())?;
        writeln!(out)?;
        for step in &script.steps {
            let frame = replayer.apply(step)?;
            serde_json::to_writer(&mut out, &frame)?;
            writeln!(out)?;
        }
        out.flush()?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("dualgraph: {err}");
        std::process::exit(1);
    }
}
