use crate::domain::Coordinate;
use serde::Serialize;
use std::time::Duration;

const LEAFLET_JS: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.js";
const LEAFLET_CSS: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.css";
const AWESOME_MARKERS_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js";
const AWESOME_MARKERS_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css";
const GLYPHICONS_CSS: &str = "https://netdna.bootstrapcdn.com/bootstrap/3.0.0/css/bootstrap-glyphicons.css";

const MAP_STYLE: &str = "html, body { width: 100%; height: 100%; margin: 0; padding: 0; }\n        #map { position: absolute; top: 0; bottom: 0; right: 0; left: 0; }";

#[derive(Debug, Clone, PartialEq)]
pub enum HeadElement {
    Refresh(Duration),
    Stylesheet(String),
    ScriptSource(String),
    Style(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Tiles { url: String, attribution: String },
    Marker { at: Coordinate, tooltip: String, color: String },
    Polyline { points: Vec<[f64; 2]>, color: String },
}

/// Inline script placed after the map setup. Scripts with the same id replace each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub id: String,
    pub source: String,
}

/// Structured Leaflet page, serialized once by [`MapDocument::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    title: String,
    center: Coordinate,
    zoom: u8,
    head: Vec<HeadElement>,
    layers: Vec<Layer>,
    scripts: Vec<Script>,
}

impl MapDocument {
    pub const MAP_VARIABLE: &'static str = "map";

    pub fn new(title: &str, center: Coordinate, zoom: u8) -> Self {
        MapDocument {
            title: title.to_string(),
            center,
            zoom,
            head: vec![
                HeadElement::ScriptSource(LEAFLET_JS.to_string()),
                HeadElement::ScriptSource(AWESOME_MARKERS_JS.to_string()),
                HeadElement::Stylesheet(LEAFLET_CSS.to_string()),
                HeadElement::Stylesheet(AWESOME_MARKERS_CSS.to_string()),
                HeadElement::Stylesheet(GLYPHICONS_CSS.to_string()),
                HeadElement::Style(MAP_STYLE.to_string()),
            ],
            layers: Vec::new(),
            scripts: Vec::new(),
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Places the refresh directive first in the head, replacing an earlier one.
    pub fn set_refresh(&mut self, interval: Duration) {
        self.head.retain(|element| !matches!(element, HeadElement::Refresh(_)));
        self.head.insert(0, HeadElement::Refresh(interval));
    }

    pub fn insert_script(&mut self, script: Script) {
        self.scripts.retain(|existing| existing.id != script.id);
        self.scripts.push(script);
    }

    pub fn render(&self) -> Result<String, serde_json::Error> {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("    <meta http-equiv=\"content-type\" content=\"text/html; charset=UTF-8\" />\n");
        for element in &self.head {
            html.push_str(&render_head_element(element));
        }
        html.push_str(&format!("    <title>{}</title>\n", escape_html(&self.title)));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("    <div id=\"{}\"></div>\n", Self::MAP_VARIABLE));

        html.push_str("<script>\n");
        html.push_str(&format!(
            "    var {var} = L.map({id}, {{ center: {center}, zoom: {zoom}, zoomControl: true }});\n",
            var = Self::MAP_VARIABLE,
            id = js_value(&Self::MAP_VARIABLE)?,
            center = js_value(&self.center.lat_lon())?,
            zoom = self.zoom,
        ));
        for layer in &self.layers {
            html.push_str(&self.render_layer(layer)?);
        }
        html.push_str("</script>\n");

        for script in &self.scripts {
            html.push_str(&format!("<script id=\"{}\">\n{}\n</script>\n", escape_html(&script.id), script.source));
        }

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }

    fn render_layer(&self, layer: &Layer) -> Result<String, serde_json::Error> {
        Ok(match layer {
            Layer::Tiles { url, attribution } => format!(
                "    L.tileLayer({}, {{ attribution: {} }}).addTo({});\n",
                js_value(url)?,
                js_value(attribution)?,
                Self::MAP_VARIABLE
            ),
            Layer::Marker { at, tooltip, color } => format!(
                "    L.marker({}, {{ icon: L.AwesomeMarkers.icon({{ markerColor: {}, icon: \"info-sign\", prefix: \"glyphicon\" }}) }}).bindTooltip({}).addTo({});\n",
                js_value(&at.lat_lon())?,
                js_value(color)?,
                js_value(tooltip)?,
                Self::MAP_VARIABLE
            ),
            Layer::Polyline { points, color } => format!(
                "    L.polyline({}, {{ color: {} }}).addTo({});\n",
                js_value(points)?,
                js_value(color)?,
                Self::MAP_VARIABLE
            ),
        })
    }
}

#[cfg(test)]
impl MapDocument {
    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn head(&self) -> &[HeadElement] {
        &self.head
    }

    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }
}

fn render_head_element(element: &HeadElement) -> String {
    match element {
        HeadElement::Refresh(interval) => format!("    <meta http-equiv=\"refresh\" content=\"{}\">\n", refresh_seconds(*interval)),
        HeadElement::Stylesheet(href) => format!("    <link rel=\"stylesheet\" href=\"{}\"/>\n", escape_html(href)),
        HeadElement::ScriptSource(src) => format!("    <script src=\"{}\"></script>\n", escape_html(src)),
        HeadElement::Style(css) => format!("    <style>\n        {}\n    </style>\n", css),
    }
}

/// Meta refresh only takes whole seconds and 0 reloads immediately, so round up to at least one.
fn refresh_seconds(interval: Duration) -> u64 {
    let seconds = interval.as_secs() + u64::from(interval.subsec_nanos() > 0);
    seconds.max(1)
}

/// JSON literal that is safe to embed in an inline script.
pub fn js_value<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
