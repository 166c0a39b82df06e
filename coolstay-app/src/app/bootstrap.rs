//! Environment configuration and the runtime boot sequence.

use std::path::PathBuf;
use std::sync::Arc;

use iced::{Size, Task};
use log::{info, warn};
use url::Url;

use crate::common::messages::DomainMessage;
use crate::content;
use crate::domains::{DomainRegistry, rooms, ui};
use crate::infrastructure::assets::AssetLoader;
use crate::infrastructure::inquiry::{HttpInquiryService, InquiryService};
use crate::state::State;
use coolstay_model::ImageSource;

/// Initial window size; `WindowResized` corrects the layout as soon
/// as the runtime reports the real one.
pub const WINDOW_SIZE: Size = Size::new(1280.0, 860.0);

const DEFAULT_INQUIRY_URL: &str = "http://localhost:8000";
const DEFAULT_ASSETS_DIR: &str = "assets";

/// Runtime configuration, sourced from the environment with defaults
/// suitable for a local relay.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the inquiry relay the forms post to.
    pub inquiry_url: Url,
    /// Directory bundled image assets are read from.
    pub assets_dir: PathBuf,
}

impl AppConfig {
    /// Read `COOLSTAY_INQUIRY_URL` and `COOLSTAY_ASSETS_DIR`, falling
    /// back to local defaults. Never fails; a malformed URL is logged
    /// and replaced so the app still opens.
    pub fn from_environment() -> Self {
        let inquiry_url = std::env::var("COOLSTAY_INQUIRY_URL")
            .ok()
            .and_then(|raw| parse_inquiry_url(&raw))
            .unwrap_or_else(default_inquiry_url);

        let assets_dir = std::env::var("COOLSTAY_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ASSETS_DIR));

        Self {
            inquiry_url,
            assets_dir,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inquiry_url: default_inquiry_url(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

fn parse_inquiry_url(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(err) => {
            warn!(
                "[Config] Ignoring malformed COOLSTAY_INQUIRY_URL {raw:?}: {err}"
            );
            None
        }
    }
}

fn default_inquiry_url() -> Url {
    Url::parse(DEFAULT_INQUIRY_URL)
        .expect("default inquiry URL must parse")
}

/// Build the initial state and the boot task that warms the landing
/// page images.
pub fn runtime_boot(
    config: &Arc<AppConfig>,
) -> (State, Task<DomainMessage>) {
    info!("[Boot] Inquiry relay at {}", config.inquiry_url);

    let inquiry: Arc<dyn InquiryService> =
        Arc::new(HttpInquiryService::new(&config.inquiry_url));
    let loader = Arc::new(AssetLoader::new(config.assets_dir.clone()));

    let domains =
        DomainRegistry::new(WINDOW_SIZE, inquiry, Arc::clone(&loader));
    let boot = warm_landing_images(&domains, &loader);

    let state = State {
        domains,
        config: Arc::clone(config),
    };

    (state, boot)
}

/// Hero and about photos go to the ui domain; showcase and card photos
/// go to the rooms domain, keyed by source.
fn warm_landing_images(
    domains: &DomainRegistry,
    loader: &Arc<AssetLoader>,
) -> Task<DomainMessage> {
    let hero_loader = Arc::clone(loader);
    let hero = Task::perform(
        async move {
            let source =
                ImageSource::Asset(content::HERO_BACKGROUND.to_owned());
            hero_loader.load(&source).await
        },
        |loaded| {
            DomainMessage::Ui(ui::Message::HeroImageLoaded(loaded.handle))
        },
    );

    let about_loader = Arc::clone(loader);
    let about = Task::perform(
        async move {
            let source =
                ImageSource::Remote(content::ABOUT_IMAGE.to_owned());
            about_loader.load(&source).await
        },
        |loaded| {
            DomainMessage::Ui(ui::Message::AboutImageLoaded(
                loaded.handle,
            ))
        },
    );

    let mut tasks = vec![hero, about];

    let sources = domains
        .rooms
        .state
        .slides
        .iter()
        .map(|slide| slide.image.clone())
        .chain(
            domains
                .rooms
                .state
                .rooms
                .iter()
                .flat_map(|room| room.images.iter().cloned()),
        );

    for source in sources {
        let loader = Arc::clone(loader);
        tasks.push(Task::perform(
            async move {
                let key = source.key().to_owned();
                let loaded = loader.load(&source).await;
                (key, loaded.handle)
            },
            |(key, handle)| {
                DomainMessage::Rooms(rooms::Message::ImageLoaded {
                    key,
                    handle,
                })
            },
        ));
    }

    Task::batch(tasks)
}
