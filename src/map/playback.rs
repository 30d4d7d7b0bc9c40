use crate::domain::{Coordinate, Route};
use crate::map::document::{MapDocument, Script, js_value};
use std::time::Duration;

pub const PLAYBACK_SCRIPT_ID: &str = "route-playback";

#[derive(Debug, Clone, Copy)]
pub struct Playback {
    pub refresh: Duration,
    pub step: Duration,
}

/// Adds the page refresh directive and a script that walks a marker along the route, looping forever.
/// Injecting again replaces both, so a document never carries more than one of each.
pub fn inject(document: &mut MapDocument, route: &Route, start: &Coordinate, playback: Playback) -> Result<(), serde_json::Error> {
    document.set_refresh(playback.refresh);
    document.insert_script(Script {
        id: PLAYBACK_SCRIPT_ID.to_string(),
        source: playback_source(route, start, playback.step)?,
    });
    Ok(())
}

fn playback_source(route: &Route, start: &Coordinate, step: Duration) -> Result<String, serde_json::Error> {
    Ok(format!(
        r#"(function () {{
    var path = {path};
    var marker = L.marker({start}).addTo({map});
    var i = 0;

    function moveMarker() {{
        if (i < path.length) {{
            marker.setLatLng([path[i][1], path[i][0]]);
            i++;
        }} else {{
            i = 0;
        }}
        setTimeout(moveMarker, {step});
    }}

    moveMarker();
}})();"#,
        path = js_value(&route.lon_lat_path())?,
        start = js_value(&start.lat_lon())?,
        map = MapDocument::MAP_VARIABLE,
        step = step.as_millis(),
    ))
}
