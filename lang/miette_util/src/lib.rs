pub mod span;

pub trait ToMiette {
    type Target;

    fn to_miette(self) -> Self::Target;
}

impl ToMiette for span::Span {
    type Target = miette::SourceSpan;

    fn to_miette(self) -> Self::Target {
        miette::SourceSpan::new(self.start.into(), self.len())
    }
}

impl<T: ToMiette> ToMiette for Option<T> {
    type Target = Option<T::Target>;

    fn to_miette(self) -> Self::Target {
        self.map(ToMiette::to_miette)
    }
}

#[cfg(test)]
mod tests {
    use super::span::Span;
    use super::ToMiette;

    #[test]
    fn span_to_miette() {
        let span = Span::new(4, 9);
        let miette_span = span.to_miette();
        assert_eq!(miette_span.offset(), 4);
        assert_eq!(miette_span.len(), 6);
    }
}
