//! Browser composition root: fetches the datasets, builds the store, wires
//! the presentation components as change listeners, and exposes the event
//! entry points the thin HTML glue calls.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo_net::http::Request;
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use foundation::{DemographicFilter, SampleYear, flag_glyph};
use formats::WorldGeometry;
use store::DashboardStore;

mod components;
mod picking;

use components::{
    ClustersComponent, MapComponent, RadarComponent, TableComponent, TrendComponent,
};

/// Primary dataset; unreachable or empty means the session fails.
const MASTER_DATA_URL: &str = "data/masterdata.csv";

/// Cluster assignments, tried in order; both failing only degrades the
/// clustering features.
const CLUSTER_DATA_URLS: [&str; 2] = [
    "src/output/clustering_results.json",
    "data/clustering_results.json",
];

/// Third-party country outlines, keyed to the dataset by name
/// normalization. Failure degrades the map to a placeholder.
const WORLD_GEOMETRY_URL: &str =
    "https://d2ad6b4ur7yvpq.cloudfront.net/naturalearth-3.3.0/ne_110m_admin_0_countries.geojson";

// Guard to prevent double-initialization of global state (relevant during hot reload).
static INITIALIZED: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK_SET: OnceLock<()> = OnceLock::new();

struct AppState {
    store: Option<DashboardStore>,
    map: Rc<RefCell<MapComponent>>,
    radar: Rc<RefCell<RadarComponent>>,
    trend: Rc<RefCell<TrendComponent>>,
    table: Rc<RefCell<TableComponent>>,
    clusters: Rc<RefCell<ClustersComponent>>,
    session_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: None,
            map: Rc::new(RefCell::new(MapComponent::new())),
            radar: Rc::new(RefCell::new(RadarComponent::new())),
            trend: Rc::new(RefCell::new(TrendComponent::new())),
            table: Rc::new(RefCell::new(TableComponent::new())),
            clusters: Rc::new(RefCell::new(ClustersComponent::new())),
            session_error: None,
        }
    }
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Safe TLS access helper that returns a default on teardown instead of
/// panicking. Use this for all STATE accesses.
fn with_state<F, R>(f: F) -> R
where
    F: FnOnce(&RefCell<AppState>) -> R,
    R: Default,
{
    STATE.try_with(f).unwrap_or_default()
}

fn init_panic_hook() {
    PANIC_HOOK_SET.get_or_init(|| {
        console_error_panic_hook::set_once();
    });
}

fn console_log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

fn console_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

fn canvas_context(id: &str) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let document = web_sys::window()?.document()?;
    let canvas = document
        .get_element_by_id(id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, ctx))
}

fn attach_canvases() {
    with_state(|state| {
        let state = state.borrow();
        if let Some((canvas, ctx)) = canvas_context("world-map") {
            state.map.borrow_mut().attach(canvas, ctx);
        }
        if let Some((canvas, ctx)) = canvas_context("cultural-chart") {
            state.radar.borrow_mut().attach(canvas, ctx);
        }
        if let Some((canvas, ctx)) = canvas_context("migration-chart") {
            state.trend.borrow_mut().attach(canvas, ctx);
        }
        if let Some((canvas, ctx)) = canvas_context("cluster-scatter") {
            state.clusters.borrow_mut().attach(canvas, ctx);
        }
    });
}

fn fail_session(message: String) {
    console_error(&message);
    with_state(|state| state.borrow_mut().session_error = Some(message));
}

/// Initializes the dashboard. The master CSV is fatal on failure; cluster
/// data and world geometry load independently afterwards and only degrade
/// their own features.
#[wasm_bindgen]
pub async fn start() -> Result<(), JsValue> {
    init_panic_hook();
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    attach_canvases();

    let csv = match fetch_text(MASTER_DATA_URL).await {
        Ok(text) => text,
        Err(err) => {
            let message = format!("Failed to load master data: {err}");
            fail_session(message.clone());
            return Err(JsValue::from_str(&message));
        }
    };
    let dataset = match formats::load_dataset(&csv) {
        Ok(dataset) => dataset,
        Err(err) => {
            let message = format!("Failed to parse master data: {err}");
            fail_session(message.clone());
            return Err(JsValue::from_str(&message));
        }
    };
    console_log(&format!("master data loaded: {} countries", dataset.len()));

    let mut store = DashboardStore::new(dataset);
    with_state(|state| {
        let state = state.borrow();
        store.register(Box::new(state.map.clone()));
        store.register(Box::new(state.radar.clone()));
        store.register(Box::new(state.trend.clone()));
        store.register(Box::new(state.table.clone()));
        store.register(Box::new(state.clusters.clone()));
    });
    // Initial paint from the empty selection.
    store.refresh();
    with_state(|state| state.borrow_mut().store = Some(store));

    spawn_local(load_cluster_data());
    spawn_local(load_world_geometry());
    Ok(())
}

async fn fetch_text(url: &str) -> Result<String, String> {
    let resp = Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.text().await.map_err(|e| e.to_string())
}

async fn load_cluster_data() {
    let mut last_err = String::new();
    for url in CLUSTER_DATA_URLS {
        let model = match fetch_text(url).await {
            Ok(text) => match formats::parse_cluster_json(&text) {
                Ok(model) => model,
                Err(e) => {
                    last_err = format!("{url}: {e}");
                    continue;
                }
            },
            Err(e) => {
                last_err = format!("{url}: {e}");
                continue;
            }
        };
        console_log(&format!(
            "cluster data loaded from {url}: {} clusters",
            model.clusters.len()
        ));
        with_state(|state| {
            let mut state = state.borrow_mut();
            if let Some(store) = state.store.as_mut() {
                store.attach_clusters(model);
            }
        });
        return;
    }

    console_error(&format!("Failed to load cluster data: {last_err}"));
    with_state(|state| {
        state.borrow().clusters.borrow_mut().set_error(last_err);
    });
}

async fn load_world_geometry() {
    let result = match fetch_text(WORLD_GEOMETRY_URL).await {
        Ok(text) => WorldGeometry::from_geojson_str(&text).map_err(|e| e.to_string()),
        Err(e) => Err(e),
    };
    match &result {
        Ok(world) => console_log(&format!(
            "world geometry loaded: {} features",
            world.features.len()
        )),
        Err(e) => console_error(&format!("Failed to load world geometry: {e}")),
    }
    with_state(|state| {
        state.borrow().map.borrow_mut().set_world(result);
    });
}

// ── Event entry points ──────────────────────────────────────────────────────

#[wasm_bindgen]
pub fn select_country(name: String) {
    with_state(|state| {
        let mut state = state.borrow_mut();
        if let Some(store) = state.store.as_mut() {
            store.select_country(&name);
        }
    });
}

/// Map click in canvas pixel coordinates; ocean clicks and unmatched
/// geometry are ignored.
#[wasm_bindgen]
pub fn map_click(x: f64, y: f64) {
    let hit = with_state(|state| {
        let state = state.borrow();
        let map = state.map.borrow();
        map.country_at(x, y)
    });
    if let Some(name) = hit {
        select_country(name);
    }
}

#[wasm_bindgen]
pub fn clear_selection() {
    with_state(|state| {
        let mut state = state.borrow_mut();
        if let Some(store) = state.store.as_mut() {
            store.clear_selection();
        }
    });
}

/// Slider years snap to the nearest sampled year.
#[wasm_bindgen]
pub fn set_year(year: u32) {
    let year = SampleYear::nearest(year.min(u16::MAX as u32) as u16);
    with_state(|state| {
        let mut state = state.borrow_mut();
        if let Some(store) = state.store.as_mut() {
            store.set_year(year);
        }
    });
}

#[wasm_bindgen]
pub fn set_filter(value: String) {
    let filter = DemographicFilter::from_str(&value);
    with_state(|state| {
        let mut state = state.borrow_mut();
        if let Some(store) = state.store.as_mut() {
            store.set_filter(filter);
        }
    });
}

#[wasm_bindgen]
pub fn expand_cluster(id: u32) {
    with_state(|state| {
        let state = state.borrow();
        state.clusters.borrow_mut().expand(id);
    });
}

#[wasm_bindgen]
pub fn collapse_clusters() {
    with_state(|state| {
        let state = state.borrow();
        state.clusters.borrow_mut().collapse();
    });
}

// ── Resize hooks: each redraws only its own chart, idempotently ─────────────

#[wasm_bindgen]
pub fn redraw_map() {
    with_state(|state| state.borrow().map.borrow_mut().resize());
}

#[wasm_bindgen]
pub fn redraw_radar() {
    with_state(|state| state.borrow().radar.borrow_mut().resize());
}

#[wasm_bindgen]
pub fn redraw_trend() {
    with_state(|state| state.borrow().trend.borrow_mut().resize());
}

#[wasm_bindgen]
pub fn redraw_scatter() {
    with_state(|state| state.borrow().clusters.borrow_mut().resize());
}

// ── Snapshot getters for the DOM glue ───────────────────────────────────────

#[wasm_bindgen]
pub fn comparison_table_json() -> String {
    with_state(|state| state.borrow().table.borrow().to_json())
}

#[wasm_bindgen]
pub fn cluster_cards_json() -> String {
    with_state(|state| state.borrow().clusters.borrow().cards_json())
}

#[wasm_bindgen]
pub fn cluster_detail_json() -> String {
    with_state(|state| state.borrow().clusters.borrow().detail_json())
}

/// Current selection chips: name, region, and a flag glyph derived from
/// the ISO country code.
#[wasm_bindgen]
pub fn selection_json() -> String {
    with_state(|state| {
        let state = state.borrow();
        let Some(store) = state.store.as_ref() else {
            return json!({ "primary": null, "secondary": null }).to_string();
        };
        let selection = store.selection();
        let chip = |slot: &Option<String>| match slot
            .as_deref()
            .and_then(|name| store.dataset().get(name))
        {
            Some(record) => json!({
                "name": record.name,
                "region": record.region,
                "continent": record.continent,
                "flag": flag_glyph(&record.name),
            }),
            None => serde_json::Value::Null,
        };
        json!({
            "primary": chip(&selection.primary),
            "secondary": chip(&selection.secondary),
            "year": selection.year.get(),
            "filter": selection.filter.as_str(),
        })
        .to_string()
    })
}

/// Fatal-load state, if any; the glue shows it instead of the dashboard.
#[wasm_bindgen]
pub fn session_error() -> Option<String> {
    with_state(|state| state.borrow().session_error.clone())
}

/// Drains the store's structured change log for diagnostics.
#[wasm_bindgen]
pub fn drain_change_log() -> String {
    with_state(|state| {
        let mut state = state.borrow_mut();
        let Some(store) = state.store.as_mut() else {
            return "[]".to_string();
        };
        let events: Vec<serde_json::Value> = store
            .drain_events()
            .into_iter()
            .map(|e| json!({ "seq": e.seq, "kind": e.kind, "message": e.message }))
            .collect();
        serde_json::Value::Array(events).to_string()
    })
}
