use super::Formatter;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr ),+ $(,)?) => {{
        $(
            $fragments.to_source($f);
        )+
    }};
}

pub(crate) trait ToSource {
    fn to_source(self, f: &mut Formatter<'_>);
}

impl ToSource for &str {
    fn to_source(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToSource for &String {
    fn to_source(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}
