use std::io::{self, Write};

const BANNER: &str = r#"
############################
*** MATHSTATS CALCULATOR ***
############################
"#;

/// Print the startup banner.
pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", BANNER.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_the_tool() {
        let mut buf = Vec::new();
        print_banner(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("MATHSTATS CALCULATOR"));
    }
}
