pub mod binding;
pub mod catalog;
pub mod chooser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod effects;
pub mod feed;
pub mod render;
pub mod search;
pub mod userdata;
pub mod view;

use std::ffi::OsString;

use clap::Parser;
use tracing::{
  debug,
  info
};

pub use binding::Platform;
pub use chooser::{
  TaskChooser,
  TodoDescriptor
};
pub use effects::{
  CurrentUser,
  EffectBus,
  Handler
};
pub use view::{
  TaskNode,
  TaskProps,
  render_task
};

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let pre =
    cli::preprocess_args(&raw_args)?;
  let cli = cli::GlobalCli::parse_from(
    pre.cleaned_args
  );

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting onboard CLI"
  );
  debug!(?pre.rc_overrides, "preprocessed rc overrides");

  let mut cfg = config::Config::load(
    cli.onboardrc.as_deref()
  )?;
  cfg.apply_overrides(
    pre.rc_overrides.into_iter().chain(
      cli
        .rc_overrides
        .into_iter()
        .map(|kv| (kv.key, kv.value))
    )
  );

  let renderer =
    render::Renderer::new(&cfg);
  let inv = cli::Invocation::parse(
    &cfg, cli.rest
  )?;

  commands::dispatch(
    &cfg,
    &renderer,
    cli.feed.as_deref(),
    inv
  )?;

  info!("done");
  Ok(())
}
