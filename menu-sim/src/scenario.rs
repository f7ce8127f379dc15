//! Scenario files: a menu config, a viewport, and a scripted event list

use anyhow::{Context, Result};
use context_menu::{ContextMenu, MenuConfig, SessionPhase, Sub};
use placement::{ContentLayout, PlacementStyle, Rect, Viewport};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: MenuConfig,
    pub viewport: Viewport,
    #[serde(default)]
    pub submenus: Vec<String>,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    LongPress { x: f64, y: f64 },
    Accessibility { action: String },
    TriggerLayout { rect: Rect },
    ContentLayout { rect: Rect },
    OverlayPress,
    SelectItem,
    Back,
    Viewport { width: f64, height: f64 },
    SubToggle { name: String, rect: Option<Rect> },
    SubContentLayout { name: String, rect: Rect },
}

/// State after one event, printed as a JSON line
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub event: Event,
    pub phase: SessionPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<PlacementStyle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub submenus: Vec<SubmenuReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmenuReport {
    pub name: String,
    pub phase: SessionPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<PlacementStyle>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))
    }

    /// Run every event against a fresh menu, reporting after each one
    pub fn run(&self) -> Result<Vec<StepReport>> {
        let mut menu = ContextMenu::new(self.config.clone(), self.viewport);
        for name in &self.submenus {
            menu.add_submenu(&Sub::new(name.as_str()))?;
        }

        let mut reports = Vec::with_capacity(self.events.len());
        for (step, event) in self.events.iter().enumerate() {
            apply(&mut menu, event).with_context(|| format!("Event {step} failed"))?;
            reports.push(report(&mut menu, step, event)?);
        }
        Ok(reports)
    }
}

fn apply(menu: &mut ContextMenu, event: &Event) -> Result<()> {
    match event {
        Event::LongPress { x, y } => {
            menu.long_press(*x, *y);
        }
        Event::Accessibility { action } => {
            menu.accessibility_action(action)?;
        }
        Event::TriggerLayout { rect } => menu.trigger_layout(*rect),
        Event::ContentLayout { rect } => {
            if !menu.content_layout(ContentLayout::from(*rect)) {
                tracing::info!("Measurement arrived after close, ignored");
            }
        }
        Event::OverlayPress => {
            menu.overlay_press();
        }
        Event::SelectItem => {
            menu.select_item(|| tracing::info!("Item selected"));
        }
        Event::Back => {
            if !menu.back_action() {
                tracing::info!("Back action not consumed by any menu");
            }
        }
        Event::Viewport { width, height } => menu.set_viewport(Viewport::new(*width, *height)),
        Event::SubToggle { name, rect } => {
            if let Some(rect) = rect {
                menu.sub_trigger_layout(name, *rect)?;
            }
            menu.sub_toggle(name)?;
        }
        Event::SubContentLayout { name, rect } => {
            menu.sub_content_layout(name, ContentLayout::from(*rect))?;
        }
    }
    Ok(())
}

fn report(menu: &mut ContextMenu, step: usize, event: &Event) -> Result<StepReport> {
    let names: Vec<String> = menu.submenu_names().map(str::to_string).collect();
    let mut submenus = Vec::with_capacity(names.len());
    for name in names {
        let phase = menu.submenu(&name)?.phase();
        let placement = menu.sub_placement(&name)?;
        submenus.push(SubmenuReport {
            name,
            phase,
            placement,
        });
    }

    Ok(StepReport {
        step,
        event: event.clone(),
        phase: menu.root().phase(),
        placement: menu.placement(),
        submenus,
    })
}
