//! Presentation components: each one owns a render target, caches the
//! snapshot it extracted from the last store notification, and redraws
//! eagerly when notified. Re-rendering from the cached snapshot (e.g. on
//! resize) is idempotent.

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use dataset::ClusterModel;
use foundation::format_count;
use formats::WorldGeometry;
use store::{ChangeListener, StoreUpdate};
use views::{
    BORDER_STROKE, BORDER_STROKE_WIDTH, ClusterCard, ClusterExplorer, MapSnapshot, MapView,
    Metric, NEUTRAL_FILL, RADAR_DOMAIN_MAX, RADAR_LEVELS, RadarSnapshot, RadarView,
    SELECTION_STROKE, SELECTION_STROKE_WIDTH, TableSnapshot, TableView, TrendSnapshot, TrendView,
};

use crate::picking;

const CHART_FONT: &str = "12px system-ui, -apple-system, Segoe UI, Roboto, sans-serif";
const PLACEHOLDER_FONT: &str = "16px system-ui, -apple-system, Segoe UI, Roboto, sans-serif";
const MUTED_TEXT: &str = "#64748b";

pub(crate) fn ctx_set_fill_style(ctx: &CanvasRenderingContext2d, value: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(value),
    );
}

pub(crate) fn ctx_set_stroke_style(ctx: &CanvasRenderingContext2d, value: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(value),
    );
}

/// Matches the canvas backing store to its CSS size so drawing stays
/// sharp after layout changes. Safe to call any number of times.
fn sync_canvas_size(canvas: &HtmlCanvasElement) {
    let w = canvas.client_width();
    let h = canvas.client_height();
    if w > 0 && h > 0 {
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }
}

fn draw_placeholder(ctx: &CanvasRenderingContext2d, w: f64, h: f64, lines: &[&str]) {
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx_set_fill_style(ctx, MUTED_TEXT);
    ctx.set_font(PLACEHOLDER_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let start = h / 2.0 - (lines.len() as f64 - 1.0) * 12.0;
    for (i, line) in lines.iter().enumerate() {
        let _ = ctx.fill_text(line, w / 2.0, start + i as f64 * 24.0);
    }
}

/// Shared canvas handle: attach once, resize at will.
struct Surface {
    canvas: Option<HtmlCanvasElement>,
    ctx: Option<CanvasRenderingContext2d>,
}

impl Surface {
    fn new() -> Self {
        Self {
            canvas: None,
            ctx: None,
        }
    }

    fn attach(&mut self, canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) {
        sync_canvas_size(&canvas);
        self.canvas = Some(canvas);
        self.ctx = Some(ctx);
    }

    fn resize(&mut self) {
        if let Some(canvas) = &self.canvas {
            sync_canvas_size(canvas);
        }
    }

    fn get(&self) -> Option<(&CanvasRenderingContext2d, f64, f64)> {
        let canvas = self.canvas.as_ref()?;
        let ctx = self.ctx.as_ref()?;
        Some((ctx, canvas.width() as f64, canvas.height() as f64))
    }
}

// ── World map ───────────────────────────────────────────────────────────────

pub struct MapComponent {
    surface: Surface,
    snapshot: MapSnapshot,
    world: Option<WorldGeometry>,
    world_error: Option<String>,
    /// normalized dataset name -> index into `snapshot.shades`.
    shade_lookup: HashMap<String, usize>,
}

impl MapComponent {
    pub fn new() -> Self {
        Self {
            surface: Surface::new(),
            snapshot: MapSnapshot::default(),
            world: None,
            world_error: None,
            shade_lookup: HashMap::new(),
        }
    }

    pub fn attach(&mut self, canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) {
        self.surface.attach(canvas, ctx);
        self.render();
    }

    pub fn set_world(&mut self, world: Result<WorldGeometry, String>) {
        match world {
            Ok(w) => {
                self.world = Some(w);
                self.world_error = None;
            }
            Err(e) => self.world_error = Some(e),
        }
        self.render();
    }

    pub fn resize(&mut self) {
        self.surface.resize();
        self.render();
    }

    /// Dataset country name under a canvas pixel, if the click landed on
    /// geometry that matches a dataset row.
    pub fn country_at(&self, x: f64, y: f64) -> Option<String> {
        let (_, w, h) = self.surface.get()?;
        let world = self.world.as_ref()?;
        let (lon, lat) = picking::unproject(x, y, w, h);
        let feature = picking::feature_at(world, lon, lat)?;
        let &idx = self.shade_lookup.get(&feature.normalized)?;
        Some(self.snapshot.shades[idx].country.clone())
    }

    fn rebuild_lookup(&mut self) {
        self.shade_lookup = self
            .snapshot
            .shades
            .iter()
            .enumerate()
            .map(|(i, s)| (foundation::normalize_country_name(&s.country), i))
            .collect();
    }

    pub fn render(&self) {
        let Some((ctx, w, h)) = self.surface.get() else {
            return;
        };
        let Some(world) = &self.world else {
            let message = if self.world_error.is_some() {
                "Map unavailable"
            } else {
                "Loading map\u{2026}"
            };
            draw_placeholder(ctx, w, h, &[message]);
            return;
        };

        ctx.clear_rect(0.0, 0.0, w, h);
        let mut selected: Vec<&formats::CountryFeature> = Vec::new();

        for feature in &world.features {
            let shade = self
                .shade_lookup
                .get(&feature.normalized)
                .map(|&i| &self.snapshot.shades[i]);
            let fill = shade.map(|s| s.fill).unwrap_or(NEUTRAL_FILL);

            trace_feature(ctx, feature, w, h);
            ctx_set_fill_style(ctx, &fill.to_css());
            ctx.fill();
            ctx_set_stroke_style(ctx, &BORDER_STROKE.to_css());
            ctx.set_line_width(BORDER_STROKE_WIDTH as f64);
            ctx.stroke();

            if shade.is_some_and(|s| s.selected) {
                selected.push(feature);
            }
        }

        // Selection outlines on top of neighbouring borders.
        for feature in selected {
            trace_feature(ctx, feature, w, h);
            ctx_set_stroke_style(ctx, &SELECTION_STROKE.to_css());
            ctx.set_line_width(SELECTION_STROKE_WIDTH as f64);
            ctx.stroke();
        }
    }
}

fn trace_feature(ctx: &CanvasRenderingContext2d, feature: &formats::CountryFeature, w: f64, h: f64) {
    ctx.begin_path();
    for ring in &feature.rings {
        for (i, &[lon, lat]) in ring.iter().enumerate() {
            let (x, y) = picking::project(lon, lat, w, h);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.close_path();
    }
}

impl ChangeListener for MapComponent {
    fn selection_changed(&mut self, update: &StoreUpdate<'_>) {
        self.snapshot = MapView::extract(update);
        self.rebuild_lookup();
        self.render();
    }
}

// ── Radar chart ─────────────────────────────────────────────────────────────

pub struct RadarComponent {
    surface: Surface,
    snapshot: RadarSnapshot,
}

impl RadarComponent {
    pub fn new() -> Self {
        Self {
            surface: Surface::new(),
            snapshot: RadarSnapshot::default(),
        }
    }

    pub fn attach(&mut self, canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) {
        self.surface.attach(canvas, ctx);
        self.render();
    }

    pub fn resize(&mut self) {
        self.surface.resize();
        self.render();
    }

    pub fn render(&self) {
        let Some((ctx, w, h)) = self.surface.get() else {
            return;
        };
        if self.snapshot.is_empty() {
            draw_placeholder(
                ctx,
                w,
                h,
                &["Select countries to view", "cultural dimensions"],
            );
            return;
        }

        ctx.clear_rect(0.0, 0.0, w, h);
        let center = (w / 2.0, h / 2.0);
        let radius = w.min(h) * 0.35;
        let axes = RadarSnapshot::axes();
        let step = std::f64::consts::TAU / axes.len() as f64;

        // Grid rings with their 20-point level labels.
        ctx_set_stroke_style(ctx, "#e2e8f0");
        ctx.set_line_width(1.0);
        ctx.set_font("10px system-ui, -apple-system, Segoe UI, Roboto, sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("alphabetic");
        for level in 1..=RADAR_LEVELS {
            let r = radius * level as f64 / RADAR_LEVELS as f64;
            ctx.begin_path();
            let _ = ctx.arc(center.0, center.1, r, 0.0, std::f64::consts::TAU);
            ctx.stroke();
            if level < RADAR_LEVELS {
                ctx_set_fill_style(ctx, "#94a3b8");
                let label = (level as f64 / RADAR_LEVELS as f64 * RADAR_DOMAIN_MAX).round();
                let _ = ctx.fill_text(&format!("{label}"), center.0, center.1 - r - 4.0);
            }
        }

        // Radial axis lines and labels.
        for (i, dim) in axes.iter().enumerate() {
            let angle = i as f64 * step - std::f64::consts::FRAC_PI_2;
            let (ex, ey) = (
                center.0 + radius * angle.cos(),
                center.1 + radius * angle.sin(),
            );
            ctx.begin_path();
            ctx.move_to(center.0, center.1);
            ctx.line_to(ex, ey);
            ctx.stroke();

            let (lx, ly) = (
                center.0 + radius * 1.15 * angle.cos(),
                center.1 + radius * 1.15 * angle.sin(),
            );
            ctx_set_fill_style(ctx, "#475569");
            let _ = ctx.fill_text(&dim.code().to_uppercase(), lx, ly);
        }

        // Country polygons.
        for series in &self.snapshot.series {
            let points = series.polygon_points(center, radius);
            ctx.begin_path();
            for (i, &(x, y)) in points.iter().enumerate() {
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.close_path();
            ctx_set_fill_style(ctx, &series.color.with_alpha(0.15).to_css());
            ctx.fill();
            ctx_set_stroke_style(ctx, &series.color.to_css());
            ctx.set_line_width(2.0);
            ctx.stroke();
        }

        draw_legend(
            ctx,
            self.snapshot
                .series
                .iter()
                .map(|s| (s.color.to_css(), s.country.as_str())),
        );
    }
}

impl ChangeListener for RadarComponent {
    fn selection_changed(&mut self, update: &StoreUpdate<'_>) {
        self.snapshot = RadarView::extract(update);
        self.render();
    }
}

// ── Migration trend chart ───────────────────────────────────────────────────

const TREND_MARGIN: (f64, f64, f64, f64) = (20.0, 60.0, 40.0, 60.0); // top right bottom left

pub struct TrendComponent {
    surface: Surface,
    snapshot: TrendSnapshot,
}

impl TrendComponent {
    pub fn new() -> Self {
        Self {
            surface: Surface::new(),
            snapshot: TrendSnapshot::default(),
        }
    }

    pub fn attach(&mut self, canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) {
        self.surface.attach(canvas, ctx);
        self.render();
    }

    pub fn resize(&mut self) {
        self.surface.resize();
        self.render();
    }

    pub fn render(&self) {
        let Some((ctx, w, h)) = self.surface.get() else {
            return;
        };
        if self.snapshot.is_empty() {
            draw_placeholder(
                ctx,
                w,
                h,
                &["Select countries to view", "migration trends"],
            );
            return;
        }

        ctx.clear_rect(0.0, 0.0, w, h);
        let (top, right, bottom, left) = TREND_MARGIN;
        let plot_w = (w - left - right).max(1.0);
        let plot_h = (h - top - bottom).max(1.0);

        let years = TrendSnapshot::years();
        let x_span = (years[years.len() - 1] - years[0]) as f64;
        let x_of = |year: u16| left + (year - years[0]) as f64 / x_span * plot_w;
        // Floor the axis max at 1 so an all-zero series still has a scale.
        let y_max = self.snapshot.y_max.max(1.0);
        let y_of = |v: f64| top + plot_h - (v / y_max) * plot_h;

        // Axes.
        ctx_set_stroke_style(ctx, "#cbd5e1");
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(left, top + plot_h);
        ctx.line_to(left + plot_w, top + plot_h);
        ctx.move_to(left, top);
        ctx.line_to(left, top + plot_h);
        ctx.stroke();

        ctx.set_font(CHART_FONT);
        ctx_set_fill_style(ctx, MUTED_TEXT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("alphabetic");
        for year in years {
            let _ = ctx.fill_text(&format!("{year}"), x_of(year), top + plot_h + 16.0);
        }
        ctx.set_text_align("right");
        const Y_TICKS: usize = 5;
        for tick in 0..=Y_TICKS {
            let v = y_max * tick as f64 / Y_TICKS as f64;
            let _ = ctx.fill_text(&format_count(v), left - 6.0, y_of(v) + 4.0);
        }

        // One polyline with point markers per country.
        for series in &self.snapshot.series {
            ctx_set_stroke_style(ctx, &series.color.to_css());
            ctx.set_line_width(2.0);
            ctx.begin_path();
            for (i, (&year, &v)) in years.iter().zip(&series.values).enumerate() {
                let (x, y) = (x_of(year), y_of(v));
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.stroke();

            ctx_set_fill_style(ctx, &series.color.to_css());
            for (&year, &v) in years.iter().zip(&series.values) {
                ctx.begin_path();
                let _ = ctx.arc(x_of(year), y_of(v), 3.0, 0.0, std::f64::consts::TAU);
                ctx.fill();
            }
        }

        draw_legend(
            ctx,
            self.snapshot
                .series
                .iter()
                .map(|s| (s.color.to_css(), s.country.as_str())),
        );
    }
}

impl ChangeListener for TrendComponent {
    fn selection_changed(&mut self, update: &StoreUpdate<'_>) {
        self.snapshot = TrendView::extract(update);
        self.render();
    }
}

fn draw_legend<'a>(
    ctx: &CanvasRenderingContext2d,
    entries: impl Iterator<Item = (String, &'a str)>,
) {
    ctx.set_font(CHART_FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    for (i, (color, label)) in entries.enumerate() {
        let y = 14.0 + i as f64 * 18.0;
        ctx_set_fill_style(ctx, &color);
        ctx.fill_rect(8.0, y - 5.0, 10.0, 10.0);
        ctx_set_fill_style(ctx, "#334155");
        let _ = ctx.fill_text(label, 24.0, y);
    }
}

// ── Comparison table ────────────────────────────────────────────────────────

/// DOM-free table component: it caches row snapshots and serializes them
/// for the thin JS glue to render, so tests can assert on output without
/// a document.
pub struct TableComponent {
    snapshot: TableSnapshot,
}

impl TableComponent {
    pub fn new() -> Self {
        Self {
            snapshot: TableSnapshot::default(),
        }
    }

    pub fn to_json(&self) -> String {
        let rows: Vec<serde_json::Value> = self
            .snapshot
            .rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "label": row.label,
                    "description": row.description,
                    "primary": row.primary,
                    "secondary": row.secondary,
                    "delta": row.delta,
                    "primaryDisplay": row.primary.map(|v| display_metric(row.metric, v)),
                    "secondaryDisplay": row.secondary.map(|v| display_metric(row.metric, v)),
                })
            })
            .collect();
        serde_json::json!({
            "empty": self.snapshot.is_empty(),
            "primaryHeader": self.snapshot.primary_header,
            "secondaryHeader": self.snapshot.secondary_header,
            "rows": rows,
        })
        .to_string()
    }
}

fn display_metric(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Migration => format_count(value),
        Metric::Dimension(_) => format!("{}", value.round() as i64),
    }
}

impl ChangeListener for TableComponent {
    fn selection_changed(&mut self, update: &StoreUpdate<'_>) {
        self.snapshot = TableView::extract(update);
    }
}

// ── Cluster explorer ────────────────────────────────────────────────────────

pub struct ClustersComponent {
    surface: Surface,
    explorer: ClusterExplorer,
    /// Cached once when the store attaches cluster data; the model never
    /// changes afterwards.
    model: Option<ClusterModel>,
    error: Option<String>,
    cards: Vec<ClusterCard>,
}

impl ClustersComponent {
    pub fn new() -> Self {
        Self {
            surface: Surface::new(),
            explorer: ClusterExplorer::new(),
            model: None,
            error: None,
            cards: Vec::new(),
        }
    }

    pub fn attach(&mut self, canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) {
        self.surface.attach(canvas, ctx);
        self.render();
    }

    pub fn resize(&mut self) {
        self.surface.resize();
        self.render();
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
        self.render();
    }

    pub fn available(&self) -> bool {
        self.model.is_some()
    }

    pub fn expand(&mut self, id: u32) -> bool {
        let Some(model) = &self.model else {
            return false;
        };
        let changed = self.explorer.expand(id, model);
        if changed {
            self.cards = self.explorer.cards(model);
            self.render();
        }
        changed
    }

    pub fn collapse(&mut self) -> bool {
        let changed = self.explorer.collapse();
        if changed {
            if let Some(model) = &self.model {
                self.cards = self.explorer.cards(model);
            }
            self.render();
        }
        changed
    }

    pub fn cards_json(&self) -> String {
        if let Some(error) = &self.error {
            if self.model.is_none() {
                return serde_json::json!({ "available": false, "error": error }).to_string();
            }
        }
        let cards: Vec<serde_json::Value> = self
            .cards
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id,
                    "name": c.name,
                    "color": c.color.to_css(),
                    "size": c.size,
                    "migrationLevel": c.migration_level,
                    "immigrationRatioPer1000": c.immigration_ratio_per_1000,
                    "examples": c.examples,
                    "truncated": c.truncated,
                    "highlighted": c.highlighted,
                    "expanded": c.expanded,
                })
            })
            .collect();
        serde_json::json!({ "available": self.model.is_some(), "cards": cards }).to_string()
    }

    pub fn detail_json(&self) -> String {
        let detail = self
            .model
            .as_ref()
            .and_then(|model| self.explorer.detail(model));
        let Some(d) = detail else {
            return serde_json::json!({ "expanded": false }).to_string();
        };
        let bars: Vec<serde_json::Value> = d
            .bars
            .iter()
            .map(|b| {
                serde_json::json!({
                    "name": b.dimension.friendly_name(),
                    "value": b.value.round(),
                    "lowLabel": b.dimension.low_label(),
                    "highLabel": b.dimension.high_label(),
                    "description": b.dimension.description(),
                    "leansHigh": b.leans_high(),
                })
            })
            .collect();
        serde_json::json!({
            "expanded": true,
            "id": d.id,
            "name": d.name,
            "color": d.color.to_css(),
            "size": d.size,
            "migrationLevel": d.migration_level,
            "immigrationRatioPer1000": d.immigration_ratio_per_1000,
            "description": d.description,
            "extendedDescription": d.extended_description,
            "dimensions": bars,
            "countries": d.members,
        })
        .to_string()
    }

    /// Draws the PCA scatter plot.
    pub fn render(&self) {
        let Some((ctx, w, h)) = self.surface.get() else {
            return;
        };
        let Some(model) = &self.model else {
            let message = if self.error.is_some() {
                "Clustering unavailable"
            } else {
                "Loading clusters\u{2026}"
            };
            draw_placeholder(ctx, w, h, &[message]);
            return;
        };

        ctx.clear_rect(0.0, 0.0, w, h);
        let points = self.explorer.scatter(model, w, h);
        let any_highlight = points.iter().any(|p| p.highlighted);

        draw_scatter_axes(ctx, w, h);
        for p in &points {
            let dimmed = any_highlight && !p.highlighted;
            let fill = if dimmed { p.color.with_alpha(0.25) } else { p.color };
            let radius: f64 = if p.highlighted { 5.0 } else { 4.0 };

            ctx.begin_path();
            let _ = ctx.arc(p.x, p.y, radius, 0.0, std::f64::consts::TAU);
            ctx_set_fill_style(ctx, &fill.to_css());
            ctx.fill();
            ctx_set_stroke_style(ctx, "#ffffff");
            ctx.set_line_width(1.0);
            ctx.stroke();
        }
    }

}

fn draw_scatter_axes(ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    ctx_set_stroke_style(ctx, "#e0e0e0");
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(20.0, h - 20.0);
    ctx.line_to(w - 20.0, h - 20.0);
    ctx.move_to(20.0, 20.0);
    ctx.line_to(20.0, h - 20.0);
    ctx.stroke();

    ctx.set_font(CHART_FONT);
    ctx_set_fill_style(ctx, "#666666");
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    let _ = ctx.fill_text("Principal Component 1", w / 2.0, h - 4.0);
}

impl ChangeListener for ClustersComponent {
    fn selection_changed(&mut self, update: &StoreUpdate<'_>) {
        if self.model.is_none() {
            if let Some(model) = update.clusters {
                self.model = Some(model.clone());
            }
        }
        let Some(model) = &self.model else {
            return;
        };

        let names = update.selection.selected_names();
        let highlight_changed = self.explorer.highlight_countries(model, &names);
        // Cards carry highlight/expand flags, so they follow every change.
        self.cards = self.explorer.cards(model);
        if highlight_changed {
            self.render();
        }
    }
}
