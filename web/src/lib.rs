use clap::Parser;
use wasm_bindgen::prelude::*;

mod card;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    card: card::CardProps,
}

impl Args {
    /// Flags come from the location hash, e.g. `#-vv&--seed=42`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        let flags = hash.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once("bingo").chain(flags))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("seed: {:?}", args.card.seed);

    let root = document()
        .get_element_by_id("bingo")
        .expect("Could not find id=\"bingo\" element");

    log::debug!("App started");
    yew::Renderer::<card::CardView>::with_root_and_props(root, args.card).render();
}
