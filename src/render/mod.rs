//! Render orchestration: one pass from (records, config) to a `Scene`.

mod area;
mod axis;
mod bar;
mod line;
mod scatter;

pub use area::AreaRenderer;
pub use bar::BarRenderer;
pub use line::LineRenderer;
pub use scatter::ScatterRenderer;

use crate::config::{ChartConfig, ChartKind};
use crate::interact::{hit_test, tooltip_lines, InteractionLayer, Tooltip};
use crate::record::Record;
use crate::scale::{build_scales, BandScale, LinearScale};
use crate::scene::{Band, Mark, Scene};
use crate::theme::ColorMap;
use crate::RenderOptions;

/// Everything a chart renderer needs to emit its primary marks.
pub struct DrawContext<'a> {
    pub records: &'a [&'a Record],
    pub fields: &'a [String],
    pub x: &'a BandScale,
    pub y: &'a LinearScale,
    pub colors: &'a ColorMap,
}

/// One of the four interchangeable drawing strategies. Implementations share
/// scales, colors, and guides; they differ only in the marks they emit.
pub trait SeriesRenderer {
    fn draw(&self, ctx: &DrawContext<'_>) -> Vec<Mark>;
}

fn renderer_for(kind: ChartKind) -> &'static dyn SeriesRenderer {
    match kind {
        ChartKind::Bar => &BarRenderer,
        ChartKind::Line => &LineRenderer,
        ChartKind::Scatter => &ScatterRenderer,
        ChartKind::Area => &AreaRenderer,
    }
}

/// Build the full scene for one render pass.
///
/// With no records or an empty field selection this returns a blank scene
/// rather than failing. A non-empty record selection keeps exactly the named
/// records in their original relative order; an empty selection keeps all.
pub fn build_scene(records: &[Record], config: &ChartConfig, opts: &RenderOptions) -> Scene {
    let theme = config.theme;
    let mut scene = Scene::empty(opts.width, opts.height, opts.margins, theme.background());

    let fields = dedup_fields(&config.fields);
    if records.is_empty() || fields.is_empty() {
        return scene;
    }

    let filtered: Vec<&Record> = if config.records.is_empty() {
        records.iter().collect()
    } else {
        records
            .iter()
            .filter(|r| config.records.iter().any(|name| *name == r.name))
            .collect()
    };

    let (x, y) = build_scales(
        &filtered,
        &fields,
        (scene.plot_left(), scene.plot_right()),
        (scene.plot_bottom(), scene.plot_top()),
    );
    let colors = ColorMap::new(&fields, theme);

    let ctx = DrawContext {
        records: &filtered,
        fields: &fields,
        x: &x,
        y: &y,
        colors: &colors,
    };

    scene.marks = renderer_for(config.kind).draw(&ctx);
    scene.guides = axis::build_guides(&ctx, &scene, theme);
    scene.bands = x
        .names()
        .iter()
        .filter_map(|name| {
            let x0 = x.position(name)?;
            Some(Band {
                name: name.clone(),
                x0,
                x1: x0 + x.bandwidth(),
            })
        })
        .collect();

    scene
}

fn dedup_fields(fields: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(fields.len());
    for field in fields {
        if !out.iter().any(|f| f == field) {
            out.push(field.clone());
        }
    }
    out
}

/// Owns the persistent scene and the transient tooltip state.
///
/// Each `render` call replaces the previous scene wholesale — there is no
/// incremental diffing and no partially rebuilt state for pointer events to
/// observe. The tooltip cache maps record names to their hover text for the
/// current pass.
pub struct ChartView {
    opts: RenderOptions,
    scene: Scene,
    interaction: InteractionLayer,
    hover_text: Vec<(String, Vec<String>)>,
}

impl ChartView {
    pub fn new(opts: RenderOptions) -> Self {
        let scene = Scene::empty(
            opts.width,
            opts.height,
            opts.margins,
            crate::theme::Theme::default().background(),
        );
        Self {
            opts,
            scene,
            interaction: InteractionLayer::new(),
            hover_text: Vec::new(),
        }
    }

    /// Run a full render pass. Any active tooltip is discarded along with the
    /// old scene.
    pub fn render(&mut self, records: &[Record], config: &ChartConfig) {
        self.interaction.leave();
        self.scene = build_scene(records, config, &self.opts);

        let fields = dedup_fields(&config.fields);
        self.hover_text = records
            .iter()
            .map(|r| (r.name.clone(), tooltip_lines(r, &fields)))
            .collect();
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Pointer entered `(px, py)`: create a tooltip if a tagged mark is under
    /// the pointer, otherwise clear any active one.
    pub fn pointer_enter(&mut self, px: f64, py: f64) -> Option<&Tooltip> {
        match hit_test(&self.scene, px, py) {
            Some(id) => {
                let lines = self
                    .hover_text
                    .iter()
                    .find(|(name, _)| *name == id.record)
                    .map(|(_, lines)| lines.clone())
                    .unwrap_or_else(|| vec![id.record.clone()]);
                self.interaction.enter(px, py, lines);
            }
            None => self.interaction.leave(),
        }
        self.interaction.active()
    }

    /// Pointer left the hovered mark: destroy the active tooltip.
    pub fn pointer_leave(&mut self) {
        self.interaction.leave();
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.interaction.active()
    }
}
