//! Native drag-and-drop payloads.
//!
//! Palette drags write `component:<kind>` into the drag data so a drop can be
//! resolved even when the engine never saw the drag start (e.g. it began in
//! another window). Anything without the prefix is someone else's drag and is
//! ignored. Drop-zone tiles write `zone-item:<id>`; browsers won't start a
//! native drag without some data attached.

#[cfg(test)]
#[path = "drag_payload_test.rs"]
mod drag_payload_test;

use canvas::doc::ComponentKind;
use web_sys::DragEvent;

/// MIME type every payload is stored under.
pub const PAYLOAD_MIME: &str = "text/plain";

const COMPONENT_PREFIX: &str = "component:";
const ZONE_ITEM_PREFIX: &str = "zone-item:";

/// Payload for a palette drag of `kind`.
pub fn encode_kind(kind: ComponentKind) -> String {
    format!("{COMPONENT_PREFIX}{}", kind.as_str())
}

/// Kind named by a palette payload, or `None` if the payload is malformed.
///
/// Well-formed payloads naming a kind the builder does not know resolve to
/// [`ComponentKind::Unknown`].
pub fn decode_kind(raw: &str) -> Option<ComponentKind> {
    let name = raw.trim().strip_prefix(COMPONENT_PREFIX)?.trim();
    if name.is_empty() {
        return None;
    }
    Some(ComponentKind::from_name(name))
}

/// Payload for a drop-zone tile drag.
pub fn encode_zone_item(id: u32) -> String {
    format!("{ZONE_ITEM_PREFIX}{id}")
}

/// Attach `payload` to a starting drag.
pub fn write(ev: &DragEvent, payload: &str) {
    let Some(transfer) = ev.data_transfer() else {
        return;
    };
    if let Err(e) = transfer.set_data(PAYLOAD_MIME, payload) {
        leptos::logging::warn!("drag payload write failed: {e:?}");
    }
}

/// Read the payload carried by a drop, if the browser exposes one.
pub fn read(ev: &DragEvent) -> Option<String> {
    let transfer = ev.data_transfer()?;
    match transfer.get_data(PAYLOAD_MIME) {
        Ok(data) => Some(data),
        Err(e) => {
            leptos::logging::warn!("drag payload read failed: {e:?}");
            None
        }
    }
}
