//! Render surfaces

use super::draw_list::{DrawCmd, DrawList};

/// Something that can show a finished frame
pub trait RenderSurface {
    fn present(&mut self, frame: &DrawList);
}

/// Headless surface: counts frames and logs a summary periodically
#[derive(Debug, Clone)]
pub struct LogSurface {
    frames: u64,
    log_every: u64,
}

impl LogSurface {
    pub fn new(log_every: u64) -> Self {
        Self {
            frames: 0,
            log_every: log_every.max(1),
        }
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSurface for LogSurface {
    fn present(&mut self, frame: &DrawList) {
        self.frames += 1;
        if self.frames % self.log_every != 0 {
            return;
        }

        let sprites = frame
            .cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Sprite { .. }))
            .count();
        let texts: Vec<&str> = frame
            .cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        log::debug!(
            "Frame {}: {} sprites | {}",
            self.frames,
            sprites,
            texts.join(" | ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_frames() {
        let mut surface = LogSurface::new(0);
        let frame = DrawList::new();
        surface.present(&frame);
        surface.present(&frame);
        assert_eq!(surface.frames(), 2);
    }
}
