//! Builds the dashboard display tree from a status snapshot.
//!
//! Rendering is pure: the clock reading, display time zone and translator
//! arrive through [`RenderContext`], and the result is a fresh [`Node`] tree.
//! Mounting the tree somewhere is the caller's job (see [`crate::refresh`]).

use crate::format::{self, Badge};
use crate::i18n::{Identity, Translator};
use crate::status::{self, Interface, Status};
use crate::view::Node;
use chrono::{FixedOffset, Local, Offset, Utc};
use std::sync::Arc;

/// Command suggested when no status is available.
pub const SERVICE_STATUS_COMMAND: &str = "/etc/init.d/mini-mwan status";

/// Default refresh cadence announced in the footer, in seconds.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;

pub const TABLE_COLUMNS: [&str; 8] = [
    "Interface",
    "Device",
    "Status",
    "Since",
    "Latency",
    "Ping Target",
    "Gateway",
    "Last Check",
];

/// Time zone used for absolute timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    pub fn format_timestamp(&self, epoch: Option<i64>) -> String {
        match self {
            Zone::Local => format::format_timestamp(epoch, &Local),
            Zone::Fixed(offset) => format::format_timestamp(epoch, offset),
        }
    }
}

/// Everything a single render needs besides the snapshot itself.
pub struct RenderContext<'a> {
    /// Current time in epoch seconds.
    pub now: i64,
    pub zone: Zone,
    pub translator: &'a dyn Translator,
    pub refresh_interval_secs: u64,
}

impl RenderContext<'_> {
    fn t(&self, msgid: &str) -> String {
        self.translator.translate(msgid)
    }
}

/// Parse `raw` and render it.
pub fn render(raw: Option<&str>, ctx: &RenderContext<'_>) -> Node {
    let status = status::parse(raw);
    render_status(status.as_ref(), ctx)
}

/// Render an already parsed snapshot. `None` and a snapshot without
/// interfaces both produce the "no status" panel.
pub fn render_status(status: Option<&Status>, ctx: &RenderContext<'_>) -> Node {
    let mut root = Node::element(
        "div",
        [("class", "cbi-map")],
        vec![
            Node::bare("h2", vec![Node::text(ctx.t("Mini-MWAN Status"))]),
            Node::element(
                "div",
                [("class", "cbi-section")],
                vec![Node::element(
                    "div",
                    [("class", "cbi-section-descr")],
                    vec![Node::text(
                        ctx.t("Real-time monitoring of WAN interface status"),
                    )],
                )],
            ),
        ],
    );

    let Some(status) = status.filter(|s| !s.interfaces.is_empty()) else {
        root.push(empty_panel(ctx));
        return root;
    };

    root.push(service_info(status, ctx));
    root.push(interface_section(&status.interfaces, ctx));
    root.push(footer(ctx));
    root
}

fn empty_panel(ctx: &RenderContext<'_>) -> Node {
    Node::element(
        "div",
        [("class", "alert-message warning")],
        vec![
            Node::bare(
                "p",
                vec![Node::text(ctx.t(
                    "No status information available. Make sure the Mini-MWAN service is running.",
                ))],
            ),
            Node::bare(
                "p",
                vec![
                    Node::text(ctx.t("Check with: ")),
                    Node::bare("code", vec![Node::text(SERVICE_STATUS_COMMAND)]),
                ],
            ),
        ],
    )
}

fn info_row(label: String, value: String, first: bool) -> Node {
    let label_cell = if first {
        Node::element(
            "td",
            [("style", "width: 33%")],
            vec![Node::bare("strong", vec![Node::text(label)])],
        )
    } else {
        Node::bare("td", vec![Node::bare("strong", vec![Node::text(label)])])
    };

    Node::bare("tr", vec![label_cell, Node::bare("td", vec![Node::text(value)])])
}

fn service_info(status: &Status, ctx: &RenderContext<'_>) -> Node {
    let check_interval = match status.check_interval {
        Some(secs) => format!("{} {}", secs, ctx.t("seconds")),
        None => ctx.t("Unknown"),
    };

    Node::element(
        "div",
        [("class", "cbi-section")],
        vec![
            Node::bare("h3", vec![Node::text(ctx.t("Service Information"))]),
            Node::element(
                "table",
                [("class", "table")],
                vec![
                    info_row(ctx.t("Mode:"), ctx.t(format::mode_label(&status.mode)), true),
                    info_row(ctx.t("Check Interval:"), check_interval, false),
                    info_row(
                        ctx.t("Last Update:"),
                        ctx.zone.format_timestamp(status.timestamp),
                        false,
                    ),
                ],
            ),
        ],
    )
}

fn cell(content: Node) -> Node {
    Node::element("td", [("class", "td")], vec![content])
}

/// Badge markup: symbol and label in a span colored by tone.
pub fn badge_node(badge: &Badge, ctx: &RenderContext<'_>) -> Node {
    let style = if badge.bold {
        format!("color: {}; font-weight: bold;", badge.tone.hex())
    } else {
        format!("color: {};", badge.tone.hex())
    };

    Node::element(
        "span",
        [
            ("class", "badge".to_string()),
            ("data-tone", badge.tone.as_str().to_string()),
            ("style", style),
        ],
        vec![Node::text(format!("{} {}", badge.symbol, ctx.t(badge.label)))],
    )
}

fn interface_row(iface: &Interface, ctx: &RenderContext<'_>) -> Node {
    Node::element(
        "tr",
        [("class", "tr")],
        vec![
            cell(Node::bare("strong", vec![Node::text(iface.name.as_str())])),
            cell(Node::text(format::or_dash(&iface.device))),
            cell(badge_node(&format::status_badge(&iface.status), ctx)),
            cell(Node::text(
                ctx.zone
                    .format_timestamp(format::epoch_value(&iface.status_since)),
            )),
            cell(Node::text(format::format_latency(&iface.latency))),
            cell(Node::text(format::or_dash(&iface.ping_target))),
            cell(Node::bare(
                "code",
                vec![Node::text(format::or_dash(&iface.gateway))],
            )),
            cell(Node::text(format::format_duration(
                format::epoch_value(&iface.last_check),
                ctx.now,
            ))),
        ],
    )
}

fn interface_section(interfaces: &[Interface], ctx: &RenderContext<'_>) -> Node {
    let header = Node::element(
        "tr",
        [("class", "tr table-titles")],
        TABLE_COLUMNS
            .iter()
            .map(|title| Node::element("th", [("class", "th")], vec![Node::text(ctx.t(title))]))
            .collect(),
    );

    let mut rows = vec![header];
    rows.extend(interfaces.iter().map(|iface| interface_row(iface, ctx)));

    Node::element(
        "div",
        [("class", "cbi-section")],
        vec![
            Node::bare("h3", vec![Node::text(ctx.t("Interface Status"))]),
            Node::element("table", [("class", "table cbi-section-table")], rows),
        ],
    )
}

fn footer(ctx: &RenderContext<'_>) -> Node {
    let notice = ctx
        .t("Status updates automatically every %d seconds")
        .replace("%d", &ctx.refresh_interval_secs.to_string());

    Node::element(
        "div",
        [("class", "cbi-section")],
        vec![Node::bare("em", vec![Node::text(notice)])],
    )
}

/// Owns the rendering settings and reads the clock on every render.
#[derive(Clone)]
pub struct Renderer {
    translator: Arc<dyn Translator>,
    zone: Zone,
    refresh_interval_secs: u64,
    clock: fn() -> i64,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            translator: Arc::new(Identity),
            zone: Zone::Local,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            clock: format::now_epoch_secs,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_refresh_interval(mut self, secs: u64) -> Self {
        self.refresh_interval_secs = secs;
        self
    }

    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn render(&self, raw: Option<&str>) -> Node {
        self.render_status(status::parse(raw).as_ref())
    }

    pub fn render_status(&self, status: Option<&Status>) -> Node {
        let ctx = RenderContext {
            now: (self.clock)(),
            zone: self.zone,
            translator: self.translator.as_ref(),
            refresh_interval_secs: self.refresh_interval_secs,
        };
        render_status(status, &ctx)
    }
}
