use crate::error::{Result, ShapeError};
use crate::math::Point3;
use crate::sampling::PointSet;

use super::{SampleStyle, Shape, ShapeCore};

/// An aggregate of child shapes sampled as one.
///
/// Each child's own transform (orientation, scale, offset) places its
/// geometry within the composite's local frame; the composite's
/// transform then carries the union into world space. Dynamic if any
/// child is dynamic.
#[derive(Debug, Clone)]
pub struct Composite {
    core: ShapeCore,
    children: Vec<Box<dyn Shape>>,
}

impl Composite {
    /// Creates a composite from child shapes.
    ///
    /// # Errors
    ///
    /// Returns an error if `children` is empty.
    pub fn new(children: Vec<Box<dyn Shape>>) -> Result<Self> {
        if children.is_empty() {
            return Err(ShapeError::EmptyComposite.into());
        }
        Ok(Self {
            core: ShapeCore::new(),
            children,
        })
    }

    /// Returns the child shapes.
    #[must_use]
    pub fn children(&self) -> &[Box<dyn Shape>] {
        &self.children
    }

    /// Appends a child shape.
    pub fn push_child(&mut self, child: Box<dyn Shape>) {
        self.children.push(child);
        self.core.bump_version();
    }

    /// Mutable access to a child. Bumps the composite's version, since
    /// the caller is assumed to mutate.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Box<dyn Shape>> {
        self.core.bump_version();
        self.children.get_mut(index)
    }

    fn generate_with<F>(&self, out: &mut PointSet, generate: F)
    where
        F: Fn(&dyn Shape, &mut PointSet),
    {
        for child in &self.children {
            let mut local = PointSet::new();
            generate(child.as_ref(), &mut local);
            let rotation = *child.core().orientation();
            let scale = child.core().scale();
            let offset = *child.core().offset();
            for p in &local {
                out.insert(Point3::from(
                    rotation.transform_vector(&p.coords) * scale + offset,
                ));
            }
        }
    }
}

impl Shape for Composite {
    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn generate_outline(&self, density: f64, out: &mut PointSet) {
        self.generate_with(out, |child, local| child.generate_outline(density, local));
    }

    fn generate_surface(&self, density: f64, out: &mut PointSet) {
        self.generate_with(out, |child, local| child.generate_surface(density, local));
    }

    fn generate_filled(&self, density: f64, out: &mut PointSet) {
        self.generate_with(out, |child, local| child.generate_filled(density, local));
    }

    fn before_sampling(&mut self, density: f64) {
        for child in &mut self.children {
            child.before_sampling(density);
        }
    }

    fn after_sampling(&self, points: &mut PointSet) {
        for child in &self.children {
            child.after_sampling(points);
        }
    }

    fn density_for_count(&self, count: usize, style: SampleStyle) -> f64 {
        let share = count / self.children.len().max(1);
        let sum: f64 = self
            .children
            .iter()
            .map(|child| child.density_for_count(share, style))
            .sum();
        sum / self.children.len().max(1) as f64
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn is_dynamic(&self) -> bool {
        self.core.is_dynamic() || self.children.iter().any(|child| child.is_dynamic())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{rotation::axis_angle, Vector3};
    use crate::shape::Circle;

    #[test]
    fn empty_composite_is_an_error() {
        assert!(Composite::new(Vec::new()).is_err());
    }

    #[test]
    fn children_keep_their_local_offsets() {
        let mut left = Circle::new(1.0);
        left.core_mut().set_offset(Vector3::new(-5.0, 0.0, 0.0));
        let mut right = Circle::new(1.0);
        right.core_mut().set_offset(Vector3::new(5.0, 0.0, 0.0));
        let pair = Composite::new(vec![
            Box::new(left) as Box<dyn Shape>,
            Box::new(right) as Box<dyn Shape>,
        ])
        .unwrap();

        let mut out = PointSet::new();
        pair.generate_outline(0.2, &mut out);
        assert!(out.iter().any(|p| p.x < -3.0));
        assert!(out.iter().any(|p| p.x > 3.0));
    }

    #[test]
    fn child_orientation_is_applied() {
        let mut tilted = Circle::new(1.0);
        tilted
            .core_mut()
            .set_orientation(axis_angle(&Vector3::x(), std::f64::consts::FRAC_PI_2));
        let one = Composite::new(vec![Box::new(tilted) as Box<dyn Shape>]).unwrap();

        let mut out = PointSet::new();
        one.generate_outline(0.2, &mut out);
        // The XY ring is now standing in the XZ plane.
        assert!(out.iter().any(|p| p.z.abs() > 0.5));
        assert!(out.iter().all(|p| p.y.abs() < 1e-9));
    }

    #[test]
    fn dynamic_child_makes_composite_dynamic() {
        let mut child = Circle::new(1.0);
        child.core_mut().set_dynamic(true);
        let agg = Composite::new(vec![Box::new(child) as Box<dyn Shape>]).unwrap();
        assert!(agg.is_dynamic());
    }
}
