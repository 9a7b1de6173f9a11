// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::{self, Receiver, TryRecvError}, Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    charts::scatter,
    config::state::AppState,
    data::Table,
    dataset::{self, Loaded, Origin},
};

use super::{components, progress::GuiProgress, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Lebanon Tourism Dashboard",
        options,
        Box::new(|cc| {
            let mut app = App::new(AppState::default());
            app.reload(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

type LoadResult = Result<Loaded, String>;

pub struct App {
    // single source of truth for widget state (UI thread only)
    pub state: AppState,

    // loaded once, never mutated; replaced wholesale on reload
    pub table: Option<Arc<Table>>,
    pub towns: Vec<String>,

    // status line (loader thread writes here)
    pub status: Arc<Mutex<String>>,
    loader: Option<Receiver<LoadResult>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: source={}", state.options.source.describe());
        Self {
            state,
            table: None,
            towns: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            loader: None,
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool { self.loader.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Kick off a background load unless one is already running.
    pub fn reload(&mut self, ctx: &egui::Context) {
        if self.is_loading() { return; }

        let (tx, rx) = mpsc::channel();
        let source = self.state.options.source.clone();
        let mut prog = GuiProgress::new(self.status.clone(), ctx.clone());
        let ctx2 = ctx.clone();

        thread::spawn(move || {
            let res = dataset::load(&source, Some(&mut prog)).map_err(|e| e.to_string());
            let _ = tx.send(res);
            ctx2.request_repaint();
        });

        self.loader = Some(rx);
        self.status("Loading…");
    }

    fn poll_loader(&mut self) {
        let Some(rx) = &self.loader else { return };
        match rx.try_recv() {
            Ok(Ok(loaded)) => {
                self.loader = None;
                self.install(loaded);
            }
            Ok(Err(msg)) => {
                self.loader = None;
                self.status(format!("Error: {msg}"));
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.loader = None;
                loge!("Loader: worker exited without a result");
                self.status("Error: loader stopped unexpectedly");
            }
        }
    }

    /// Swap in a freshly loaded table and reconcile widget state with it.
    fn install(&mut self, loaded: Loaded) {
        let Loaded { table, origin } = loaded;

        self.towns = table.towns().unwrap_or_default();

        let pie = &mut self.state.options.pie;
        let before = pie.selected_towns.len();
        pie.selected_towns.retain(|t| self.towns.contains(t));
        if pie.selected_towns.len() != before {
            logw!("Init: dropped {} selected town(s) not in dataset", before - pie.selected_towns.len());
        }

        if let Ok((lo, hi)) = scatter::index_bounds(&table) {
            let idx = &mut self.state.options.scatter.index;
            match *idx {
                Some(i) if (lo..=hi).contains(&i) => {}
                _ => *idx = Some(lo),
            }
        }

        let where_from = match origin {
            Origin::Remote => "remote",
            Origin::File => "file",
            Origin::Cache => "cached copy, offline",
        };
        self.status(format!("Ready: {} rows, {} towns ({where_from})", table.row_count(), self.towns.len()));
        self.table = Some(Arc::new(table));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            components::top_bar::draw(ui, self);
        });

        egui::SidePanel::left("towns")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                components::town_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(table) = self.table.clone() else {
                ui.centered_and_justified(|ui| {
                    ui.label(self.status_text());
                });
                return;
            };

            egui::ScrollArea::vertical()
                .id_salt("panels_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for panel in router::all_panels() {
                        panel.draw(ui, &mut self.state, &table);
                        ui.add_space(12.0);
                        ui.separator();
                    }
                });
        });
    }
}
