use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// The 3D cursor replaces the system pointer while it is on screen.
pub fn set_system_cursor_hidden(hidden: bool) -> anyhow::Result<()> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    let style = body.style();
    if hidden {
        style
            .set_property("cursor", "none")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    } else {
        style
            .remove_property("cursor")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}
