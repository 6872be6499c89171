//! Text rendering of test values.
//!
//! Values checked with the function form of the harness must be printable in
//! diagnostics. `Vec` and slices do not implement `Display`, so the harness
//! uses its own small trait with a fixed format for sequences:
//!
//! ```
//! use listing_harness::Render;
//!
//! assert_eq!(vec![1, 2, 3].render(), "[1,2,3]");
//! assert_eq!(Vec::<i32>::new().render(), "[]");
//! assert_eq!((1, "a").render(), "(1,a)");
//! ```

/// Converts a value to the text shown in failure diagnostics.
pub trait Render {
    /// Renders the value.
    fn render(&self) -> String;
}

macro_rules! render_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Render for $t {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self) -> String {
        self.as_ref().map_or_else(|| "None".to_string(), Render::render)
    }
}

impl<T: Render> Render for [T] {
    fn render(&self) -> String {
        let items: Vec<String> = self.iter().map(Render::render).collect();
        format!("[{}]", items.join(","))
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self) -> String {
        self.as_slice().render()
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self) -> String {
        self.as_slice().render()
    }
}

impl<A: Render, B: Render> Render for (A, B) {
    fn render(&self) -> String {
        format!("({},{})", self.0.render(), self.1.render())
    }
}

impl<A: Render, B: Render, C: Render> Render for (A, B, C) {
    fn render(&self) -> String {
        format!("({},{},{})", self.0.render(), self.1.render(), self.2.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        assert_eq!(42i32.render(), "42");
        assert_eq!((-7i64).render(), "-7");
        assert_eq!(2.5f64.render(), "2.5");
        assert_eq!(true.render(), "true");
        assert_eq!('x'.render(), "x");
        assert_eq!("text".render(), "text");
        assert_eq!(String::from("owned").render(), "owned");
    }

    #[test]
    fn sequences() {
        assert_eq!(vec![1, 2, 3].render(), "[1,2,3]");
        assert_eq!(vec![7].render(), "[7]");
        assert_eq!(Vec::<u8>::new().render(), "[]");
        assert_eq!([4, 5].render(), "[4,5]");
        assert_eq!(vec![vec![1], vec![2, 3]].render(), "[[1],[2,3]]");
    }

    #[test]
    fn strings_in_sequences_are_unquoted() {
        assert_eq!(vec!["ab", "cd"].render(), "[ab,cd]");
    }

    #[test]
    fn options_and_tuples() {
        assert_eq!(Some(3).render(), "3");
        assert_eq!(None::<i32>.render(), "None");
        assert_eq!((1, 2.5).render(), "(1,2.5)");
        assert_eq!((1, 'c', "s").render(), "(1,c,s)");
    }

    #[test]
    fn references_and_boxes() {
        let v = vec![1, 2];
        assert_eq!((&v).render(), "[1,2]");
        assert_eq!(Box::new(9i32).render(), "9");
    }
}
