// Transform - caller-supplied processing of the image/depth/boxes triple
//
// The dataset does no augmentation of its own. Whatever the caller plugs in
// here receives the raw decoded frame and its output replaces all three
// fields of the returned sample.

use doorhandle_core::{Frame, Result};

/// A transform applied to each frame before the sample is returned.
pub trait Transform: Send + Sync {
    /// Consume a frame and return its (possibly reshaped) replacement.
    fn apply(&self, frame: Frame) -> Result<Frame>;
}

impl<F> Transform for F
where
    F: Fn(Frame) -> Result<Frame> + Send + Sync,
{
    fn apply(&self, frame: Frame) -> Result<Frame> {
        self(frame)
    }
}

/// Pass the frame through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn apply(&self, frame: Frame) -> Result<Frame> {
        Ok(frame)
    }
}

/// Chain multiple transforms, applied in order. The first error stops the chain.
pub struct Compose {
    transforms: Vec<Box<dyn Transform>>,
}

impl Compose {
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Self {
        Self { transforms }
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl Transform for Compose {
    fn apply(&self, mut frame: Frame) -> Result<Frame> {
        for t in &self.transforms {
            frame = t.apply(frame)?;
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doorhandle_core::{BoundingBox, Error, Raster};

    fn frame() -> Frame {
        Frame {
            image: Raster::zeros(vec![2, 2, 3]),
            depth: Raster::zeros(vec![2, 2, 1]),
            boxes: vec![BoundingBox::new(0, 0.5, 0.5, 0.2, 0.2)],
        }
    }

    #[test]
    fn identity_is_noop() {
        assert_eq!(Identity.apply(frame()).unwrap(), frame());
    }

    #[test]
    fn closure_is_transform() {
        let drop_boxes = |mut f: Frame| -> Result<Frame> {
            f.boxes.clear();
            Ok(f)
        };
        assert!(drop_boxes.apply(frame()).unwrap().boxes.is_empty());
    }

    #[test]
    fn compose_runs_in_order() {
        let shift = |mut f: Frame| -> Result<Frame> {
            for b in &mut f.boxes {
                b.cx += 0.1;
            }
            Ok(f)
        };
        let double = |mut f: Frame| -> Result<Frame> {
            for b in &mut f.boxes {
                b.cx *= 2.0;
            }
            Ok(f)
        };
        let t = Compose::new(vec![Box::new(shift), Box::new(double)]);
        assert_eq!(t.len(), 2);
        let out = t.apply(frame()).unwrap();
        assert!((out.boxes[0].cx - 1.2).abs() < 1e-6);
    }

    #[test]
    fn compose_stops_on_error() {
        let fail = |_: Frame| -> Result<Frame> { Err(Error::Transform("nope".into())) };
        let t = Compose::new(vec![Box::new(Identity), Box::new(fail)]);
        assert!(matches!(t.apply(frame()), Err(Error::Transform(_))));
    }
}
