use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, anyhow};
use tracing::{debug, info, instrument};

use crate::catalog;
use crate::chooser::{TaskChooser, TodoDescriptor};
use crate::cli::Invocation;
use crate::config::{Config, resolve_feed_path};
use crate::effects::{RecordingBus, StaticUser};
use crate::feed::FeedFile;
use crate::render::Renderer;
use crate::search::SearchBar;
use crate::userdata::fill_user_data;
use crate::view::{LATER_LABEL, TaskNode};

const USAGE: &str = "\
usage: onboard [-v|-q] [--rc KEY=VALUE]... [--onboardrc PATH] [--feed PATH] <command> [args]

commands:
  list                 render every to-do card (default)
  show N               render card N
  confirm N            press the first button on card N
  dismiss N            press the dismiss button on card N
  click N LABEL        press the button labelled LABEL on card N
  search USERNAME      pick USERNAME from the people search
  types                list known to-do types
  version              print the version
";

/// A rendered card together with the descriptor it came from.
#[derive(Debug, Clone)]
pub struct Card {
    pub index: usize,
    pub descriptor: TodoDescriptor,
    pub node: TaskNode,
}

/// Cards built against one recording bus.
pub struct Session {
    pub bus: Rc<RecordingBus>,
    pub cards: Vec<Card>,
}

impl Session {
    /// Fills user data, then renders every todo the chooser recognizes.
    /// Cards are numbered from 1 in feed order.
    #[instrument(skip_all)]
    pub fn build(cfg: &Config, mut feed: FeedFile) -> anyhow::Result<Self> {
        let source = feed.clone();
        fill_user_data(&mut feed.home, &source)?;

        let username = cfg.username().or(feed.username.clone());
        let bus = Rc::new(RecordingBus::new());
        let chooser = TaskChooser::new(bus.clone(), Rc::new(StaticUser(username)), cfg.platform()?);

        let cards: Vec<Card> = catalog::descriptors(&feed.home)
            .into_iter()
            .filter_map(|descriptor| {
                let node = chooser.choose_task(&descriptor)?;
                Some((descriptor, node))
            })
            .enumerate()
            .map(|(i, (descriptor, node))| Card {
                index: i + 1,
                descriptor,
                node,
            })
            .collect();

        debug!(cards = cards.len(), platform = ?chooser.platform(), "built session");
        Ok(Self { bus, cards })
    }

    pub fn card(&self, raw_index: &str) -> anyhow::Result<&Card> {
        let index: usize = raw_index
            .parse()
            .with_context(|| format!("invalid card number: {raw_index}"))?;
        self.cards
            .iter()
            .find(|card| card.index == index)
            .ok_or_else(|| anyhow!("no card {index}; there are {} cards", self.cards.len()))
    }

    /// Presses `label` on the card; effects land on the session bus.
    pub fn press(&self, card: &Card, label: &str) -> anyhow::Result<()> {
        let button = card
            .node
            .button(label)
            .ok_or_else(|| anyhow!("card {} has no \"{label}\" button", card.index))?;
        info!(card = card.index, label, "pressing button");
        button.press();
        Ok(())
    }
}

fn open_session(cfg: &Config, feed_override: Option<&Path>) -> anyhow::Result<Session> {
    let path = resolve_feed_path(cfg, feed_override)?;
    let feed = FeedFile::load(&path)?;
    Session::build(cfg, feed)
}

fn required_arg<'a>(args: &'a [String], idx: usize, what: &str) -> anyhow::Result<&'a str> {
    args.get(idx)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing {what}"))
}

#[instrument(skip(cfg, renderer, feed_override, inv))]
pub fn dispatch(
    cfg: &Config,
    renderer: &Renderer,
    feed_override: Option<&Path>,
    inv: Invocation,
) -> anyhow::Result<()> {
    let command = inv.command.as_str();
    let args = &inv.command_args;
    debug!(command, ?args, "dispatching command");

    match command {
        | "list" => {
            let session = open_session(cfg, feed_override)?;
            let cards: Vec<(usize, TaskNode)> = session
                .cards
                .into_iter()
                .map(|card| (card.index, card.node))
                .collect();
            renderer.print_cards(&cards)
        }
        | "show" => {
            let session = open_session(cfg, feed_override)?;
            let card = session.card(required_arg(args, 0, "card number")?)?;
            renderer.print_card(card.index, &card.node)
        }
        | "confirm" => {
            let session = open_session(cfg, feed_override)?;
            let card = session.card(required_arg(args, 0, "card number")?)?;
            let first = card
                .node
                .buttons()
                .next()
                .ok_or_else(|| anyhow!("card {} has no buttons", card.index))?;
            session.press(card, &first.label)?;
            renderer.print_effects(&session.bus.take())
        }
        | "dismiss" => {
            let session = open_session(cfg, feed_override)?;
            let card = session.card(required_arg(args, 0, "card number")?)?;
            let label = [card.descriptor.dismiss_label.as_deref(), Some(LATER_LABEL)]
                .into_iter()
                .flatten()
                .find(|label| card.node.button(label).is_some())
                .ok_or_else(|| anyhow!("card {} cannot be dismissed", card.index))?;
            session.press(card, label)?;
            renderer.print_effects(&session.bus.take())
        }
        | "click" => {
            let session = open_session(cfg, feed_override)?;
            let card = session.card(required_arg(args, 0, "card number")?)?;
            if args.len() < 2 {
                return Err(anyhow!("missing button label"));
            }
            session.press(card, &args[1..].join(" "))?;
            renderer.print_effects(&session.bus.take())
        }
        | "search" => {
            let username = required_arg(args, 0, "username")?;
            let bus = Rc::new(RecordingBus::new());
            SearchBar::new(bus.clone(), None).on_click(username);
            renderer.print_effects(&bus.take())
        }
        | "types" => renderer.print_types(),
        | "help" => {
            print!("{USAGE}");
            Ok(())
        }
        | "version" => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        | other => Err(anyhow!("unknown command: {other}")),
    }
}
