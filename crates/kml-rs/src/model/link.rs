// crates/kml-rs/src/model/link.rs

//! `<Link>` and its href-only base.

use super::{Entity, FieldSetter, Fields, ObjectBase, apply_table, set_from_table};
use crate::codec::{TokenEnum, token_enum};
use crate::coerce::{AttributeMap, parse_float, parse_reference, parse_token};
use crate::element::Element;
use crate::error::KmlError;
use crate::types::ResourceRef;

/// Default for `<refreshInterval>`, in seconds.
pub const DEFAULT_REFRESH_INTERVAL: f64 = 4.0;
/// Default for `<viewRefreshTime>`, in seconds.
pub const DEFAULT_VIEW_REFRESH_TIME: f64 = 4.0;
/// Default for `<viewBoundScale>`.
pub const DEFAULT_VIEW_BOUND_SCALE: f64 = 1.0;

token_enum! {
    /// Time-based refresh policy of a [`Link`].
    pub enum RefreshMode default OnChange {
        /// Refresh when the file is loaded and whenever the link parameters change.
        OnChange => "onChange",
        /// Refresh every `refreshInterval` seconds.
        OnInterval => "onInterval",
        /// Refresh when the fetched file expires.
        OnExpire => "onExpire",
    }
}

token_enum! {
    /// How a [`Link`] is refreshed when the camera moves.
    pub enum ViewRefreshMode default Never {
        /// Ignore view changes (and `viewFormat`).
        Never => "never",
        /// Refresh only on explicit user request.
        OnRequest => "onRequest",
        /// Refresh `viewRefreshTime` seconds after the camera stops.
        OnStop => "onStop",
        /// Refresh when the owning Region becomes active.
        OnRegion => "onRegion",
    }
}

/// A bare resource reference: `<href>` and nothing else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicLink {
    pub object: ObjectBase,
    pub href: Option<ResourceRef>,
}

impl BasicLink {
    const FIELDS: &'static [FieldSetter<Self>] =
        &[("href", |l, raw| l.href = parse_reference(raw))];

    pub fn new(href: &str) -> Self {
        Self {
            href: ResourceRef::parse(href),
            ..Default::default()
        }
    }
}

impl Fields for BasicLink {
    fn hydrate(&mut self, attributes: &AttributeMap) {
        self.object.hydrate(attributes);
        apply_table(self, Self::FIELDS, attributes);
    }

    fn set_field(&mut self, name: &str, raw: &str) -> bool {
        set_from_table(self, Self::FIELDS, name, raw) || self.object.set_field(name, raw)
    }

    fn append_fields(&self, element: &mut Element) -> Result<(), KmlError> {
        self.object.append_fields(element)?;
        element.add_simple_child("href", self.href.as_ref());
        Ok(())
    }
}

/// Location of a file fetched by a network link, an overlay image or a
/// model, together with the parameters that control when it is refreshed.
///
/// Two independent refresh policies exist: a time-based one
/// (`refresh_mode`, `refresh_interval`) and a view-based one
/// (`view_refresh_mode`, `view_refresh_time`). `view_bound_scale` scales the
/// BBOX sent to the server; `view_format` and `http_query` are query-string
/// templates appended to remote hrefs.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub basic: BasicLink,
    pub refresh_mode: RefreshMode,
    pub refresh_interval: f64,
    pub view_refresh_mode: ViewRefreshMode,
    pub view_refresh_time: f64,
    pub view_bound_scale: f64,
    /// An empty string is meaningful: it suppresses the default BBOX query.
    pub view_format: Option<String>,
    pub http_query: Option<String>,
}

impl Default for Link {
    fn default() -> Self {
        Self {
            basic: BasicLink::default(),
            refresh_mode: RefreshMode::DEFAULT,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            view_refresh_mode: ViewRefreshMode::DEFAULT,
            view_refresh_time: DEFAULT_VIEW_REFRESH_TIME,
            view_bound_scale: DEFAULT_VIEW_BOUND_SCALE,
            view_format: None,
            http_query: None,
        }
    }
}

impl Link {
    const FIELDS: &'static [FieldSetter<Self>] = &[
        ("refreshMode", |l, raw| l.refresh_mode = parse_token(raw)),
        ("refreshInterval", |l, raw| {
            l.refresh_interval = parse_float("refreshInterval", raw, DEFAULT_REFRESH_INTERVAL)
        }),
        ("viewRefreshMode", |l, raw| l.view_refresh_mode = parse_token(raw)),
        ("viewRefreshTime", |l, raw| {
            l.view_refresh_time = parse_float("viewRefreshTime", raw, DEFAULT_VIEW_REFRESH_TIME)
        }),
        ("viewBoundScale", |l, raw| {
            l.view_bound_scale = parse_float("viewBoundScale", raw, DEFAULT_VIEW_BOUND_SCALE)
        }),
        ("viewFormat", |l, raw| l.view_format = Some(raw.into())),
        ("httpQuery", |l, raw| l.http_query = Some(raw.into())),
    ];

    pub fn new(href: &str) -> Self {
        Self {
            basic: BasicLink::new(href),
            ..Default::default()
        }
    }

    pub fn href(&self) -> Option<&ResourceRef> {
        self.basic.href.as_ref()
    }

    pub fn set_href(&mut self, href: Option<ResourceRef>) {
        self.basic.href = href;
    }
}

impl Fields for Link {
    fn hydrate(&mut self, attributes: &AttributeMap) {
        self.basic.hydrate(attributes);
        apply_table(self, Self::FIELDS, attributes);
    }

    fn set_field(&mut self, name: &str, raw: &str) -> bool {
        set_from_table(self, Self::FIELDS, name, raw) || self.basic.set_field(name, raw)
    }

    fn append_fields(&self, element: &mut Element) -> Result<(), KmlError> {
        self.basic.append_fields(element)?;
        element.add_simple_child_with_default(
            "refreshMode",
            self.refresh_mode,
            RefreshMode::DEFAULT,
        );
        element.add_simple_child_with_default(
            "refreshInterval",
            self.refresh_interval,
            DEFAULT_REFRESH_INTERVAL,
        );
        element.add_simple_child_with_default(
            "viewRefreshMode",
            self.view_refresh_mode,
            ViewRefreshMode::DEFAULT,
        );
        element.add_simple_child_with_default(
            "viewRefreshTime",
            self.view_refresh_time,
            DEFAULT_VIEW_REFRESH_TIME,
        );
        element.add_simple_child_with_default(
            "viewBoundScale",
            self.view_bound_scale,
            DEFAULT_VIEW_BOUND_SCALE,
        );
        element.add_simple_child("viewFormat", self.view_format.as_deref());
        element.add_simple_child("httpQuery", self.http_query.as_deref());
        Ok(())
    }
}

impl Entity for Link {
    const ELEMENT_NAME: &'static str = "Link";
}
