/// A host container the UI attaches to
#[derive(Debug, Clone, PartialEq)]
pub struct Mount {
    pub id: String,
    /// Width in points at lookup time
    pub width: f32,
}

/// Resolves mount points by id
pub trait MountLookup {
    fn find(&self, id: &str) -> Option<Mount>;
}

/// Native window: the controls container is a fixed-width side panel and the
/// canvas container takes the remaining width.
#[derive(Debug, Clone)]
pub struct WindowMounts {
    pub window_width: f32,
    pub controls_width: f32,
    pub controls_id: String,
    pub canvas_id: String,
}

impl MountLookup for WindowMounts {
    fn find(&self, id: &str) -> Option<Mount> {
        let width = if id == self.controls_id {
            self.controls_width
        } else if id == self.canvas_id {
            (self.window_width - self.controls_width).max(0.0)
        } else {
            return None;
        };
        Some(Mount {
            id: id.to_owned(),
            width,
        })
    }
}

/// Browser document: containers are looked up with `getElementById`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct DocumentMounts {
    document: web_sys::Document,
}

#[cfg(target_arch = "wasm32")]
impl DocumentMounts {
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn element(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

#[cfg(target_arch = "wasm32")]
impl MountLookup for DocumentMounts {
    fn find(&self, id: &str) -> Option<Mount> {
        let element = self.element(id)?;
        Some(Mount {
            id: id.to_owned(),
            width: element.client_width() as f32,
        })
    }
}
