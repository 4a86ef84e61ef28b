#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use label_sheet::LabelOptions;
use std::path::Path;

mod app;
mod logger;
mod ui_components;
mod views;

const APP_TITLE: &str = "Ejector Label PDF Creator";
const CONFIG_FILE: &str = "label-sheet.json";
const ICON_FILE: &str = "mycronic_logo.png";
const BANNER_FILE: &str = "mycronic RGB.png";

fn load_rgba(path: &Path) -> image::ImageResult<image::RgbaImage> {
    Ok(image::open(path)?.into_rgba8())
}

fn load_icon(path: &Path) -> Option<egui::IconData> {
    match load_rgba(path) {
        Ok(image) => {
            let (width, height) = image.dimensions();
            Some(egui::IconData {
                rgba: image.into_raw(),
                width,
                height,
            })
        }
        Err(e) => {
            log::warn!("Failed to load window icon {}: {e}", path.display());
            None
        }
    }
}

fn load_banner(path: &Path) -> Option<egui::ColorImage> {
    match load_rgba(path) {
        Ok(image) => {
            let size = [image.width() as usize, image.height() as usize];
            Some(egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
        }
        Err(e) => {
            log::warn!("Failed to load logo image {}: {e}", path.display());
            None
        }
    }
}

async fn load_options(path: &Path) -> LabelOptions {
    if !path.exists() {
        return LabelOptions::default();
    }

    match LabelOptions::load(path).await {
        Ok(options) => {
            log::info!("Loaded settings from {}", path.display());
            options
        }
        Err(e) => {
            log::error!("Ignoring {}: {e}", path.display());
            LabelOptions::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let logger = logger::AppLogger::new(500, log::LevelFilter::Info);
    logger.clone().init()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let options = runtime.block_on(load_options(Path::new(CONFIG_FILE)));

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([600.0, 760.0])
        .with_title(APP_TITLE);
    if let Some(icon) = load_icon(Path::new(ICON_FILE)) {
        viewport = viewport.with_icon(icon);
    }
    let banner = load_banner(Path::new(BANNER_FILE));

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(app::LabelApp::new(
                cc, runtime, options, logger, banner,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
