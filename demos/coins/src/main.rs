use egui_header_filter::backends::sqlite::SqliteSource;
use egui_header_filter::header_filter_core::{FieldType, FilterColumn, Status};
use egui_header_filter::list_view::ListViewState;
use egui_header_filter::rusqlite::{self, params};
use egui_header_filter::ListView;
use log::{info, warn};
use strum::IntoEnumIterator;

const STATE_KEY: &str = "coins_list_view";

const COUNTRIES: &[(&str, Option<&str>)] = &[
    ("France", Some("🇫🇷")),
    ("Germany", Some("🇩🇪")),
    ("Italy", Some("🇮🇹")),
    ("Rome", None),
    ("Russia", Some("🇷🇺")),
    ("", None),
];

const DENOMINATIONS: &[f64] = &[0.125, 0.25, 0.5, 1.0, 2.0, 2.5, 5.0, 10.0, 0.01];

struct CoinsApp {
    source: SqliteSource,
    view: ListView,
}

impl CoinsApp {
    fn new(cc: &eframe::CreationContext<'_>, mut source: SqliteSource) -> Self {
        let mut view = ListView::new([
            FilterColumn::new("title", FieldType::String).title("Title"),
            FilterColumn::new("country", FieldType::String).title("Country"),
            FilterColumn::new("year", FieldType::Year).title("Year"),
            FilterColumn::new("status", FieldType::Status).title("Status"),
            FilterColumn::new("value", FieldType::Denomination).title("Value"),
            FilterColumn::new("note", FieldType::Text).title("Note"),
        ]);
        if let Some(state) = cc
            .storage
            .and_then(|storage| eframe::get_value::<ListViewState>(storage, STATE_KEY))
        {
            info!("restoring {} saved column filter(s)", state.filters.len());
            view.load_state(state, &mut source);
        }
        CoinsApp { source, view }
    }
}

impl eframe::App for CoinsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("MenuBar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                egui::widgets::global_theme_preference_buttons(ui);

                ui.separator();

                let any = !self.view.registry().is_empty();
                if ui
                    .add_enabled(any, egui::Button::new("Clear all filters"))
                    .clicked()
                {
                    self.view.clear_all_filters(&mut self.source);
                }
            })
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.show(&mut self.source, ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, STATE_KEY, &self.view.save_state());
    }
}

fn seed() -> rusqlite::Result<SqliteSource> {
    let mut source = SqliteSource::open_in_memory("coins")?;
    source.connection().execute_batch(
        "CREATE TABLE coins (title TEXT, country TEXT, year INTEGER, status TEXT, value REAL, note TEXT)",
    )?;

    let statuses: Vec<Status> = Status::iter().collect();
    let mut insert = source.connection().prepare(
        "INSERT INTO coins (title, country, year, status, value, note) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for i in 0..500usize {
        let (country, _) = COUNTRIES[i % COUNTRIES.len()];
        let country = (i % 17 != 0).then_some(country);
        let year = match country {
            Some("Rome") => Some(-(i as i64 % 300)),
            _ if i % 13 == 0 => None,
            _ => Some(1800 + (i as i64 * 7) % 220),
        };
        let status: &'static str = statuses[(i * 5) % statuses.len()].into();
        let value = DENOMINATIONS[i % DENOMINATIONS.len()];
        let note = match i % 4 {
            0 => Some(format!("Lot #{i}")),
            1 => Some(String::new()),
            _ => None,
        };
        insert.execute(params![
            format!("Coin {i}"),
            country,
            year,
            status,
            value,
            note
        ])?;
    }
    drop(insert);

    for (country, flag) in COUNTRIES {
        if let Some(flag) = flag {
            source.set_icon("country", country, flag);
        }
    }
    Ok(source)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let source = seed()?;
    eframe::run_native(
        "Coins Demo",
        eframe::NativeOptions {
            centered: true,
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(CoinsApp::new(cc, source)))),
    )
    .map_err(|err| {
        warn!("eframe exited with an error: {err}");
        err.to_string().into()
    })
}
