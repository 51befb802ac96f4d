//! Embedded color palettes.
//!
//! Each palette is a block of gnuplot commands defining eight numbered line
//! styles plus a continuous palette ramp over the same colors. Draw entries
//! pick these up through their line-style ordinal.

/// Name of the palette used when a figure never sets one.
pub const DEFAULT_PALETTE: &str = "dark2";

const DARK2: &str = "\
set style line 1 lt 1 lc rgb '#1B9E77'
set style line 2 lt 1 lc rgb '#D95F02'
set style line 3 lt 1 lc rgb '#7570B3'
set style line 4 lt 1 lc rgb '#E7298A'
set style line 5 lt 1 lc rgb '#66A61E'
set style line 6 lt 1 lc rgb '#E6AB02'
set style line 7 lt 1 lc rgb '#A6761D'
set style line 8 lt 1 lc rgb '#666666'
set palette maxcolors 8
set palette defined ( 0 '#1B9E77', 1 '#D95F02', 2 '#7570B3', 3 '#E7298A', 4 '#66A61E', 5 '#E6AB02', 6 '#A6761D', 7 '#666666' )
";

const SET1: &str = "\
set style line 1 lt 1 lc rgb '#E41A1C'
set style line 2 lt 1 lc rgb '#377EB8'
set style line 3 lt 1 lc rgb '#4DAF4A'
set style line 4 lt 1 lc rgb '#984EA3'
set style line 5 lt 1 lc rgb '#FF7F00'
set style line 6 lt 1 lc rgb '#FFFF33'
set style line 7 lt 1 lc rgb '#A65628'
set style line 8 lt 1 lc rgb '#F781BF'
set palette maxcolors 8
set palette defined ( 0 '#E41A1C', 1 '#377EB8', 2 '#4DAF4A', 3 '#984EA3', 4 '#FF7F00', 5 '#FFFF33', 6 '#A65628', 7 '#F781BF' )
";

const SET2: &str = "\
set style line 1 lt 1 lc rgb '#66C2A5'
set style line 2 lt 1 lc rgb '#FC8D62'
set style line 3 lt 1 lc rgb '#8DA0CB'
set style line 4 lt 1 lc rgb '#E78AC3'
set style line 5 lt 1 lc rgb '#A6D854'
set style line 6 lt 1 lc rgb '#FFD92F'
set style line 7 lt 1 lc rgb '#E5C494'
set style line 8 lt 1 lc rgb '#B3B3B3'
set palette maxcolors 8
set palette defined ( 0 '#66C2A5', 1 '#FC8D62', 2 '#8DA0CB', 3 '#E78AC3', 4 '#A6D854', 5 '#FFD92F', 6 '#E5C494', 7 '#B3B3B3' )
";

const PAIRED: &str = "\
set style line 1 lt 1 lc rgb '#A6CEE3'
set style line 2 lt 1 lc rgb '#1F78B4'
set style line 3 lt 1 lc rgb '#B2DF8A'
set style line 4 lt 1 lc rgb '#33A02C'
set style line 5 lt 1 lc rgb '#FB9A99'
set style line 6 lt 1 lc rgb '#E31A1C'
set style line 7 lt 1 lc rgb '#FDBF6F'
set style line 8 lt 1 lc rgb '#FF7F00'
set palette maxcolors 8
set palette defined ( 0 '#A6CEE3', 1 '#1F78B4', 2 '#B2DF8A', 3 '#33A02C', 4 '#FB9A99', 5 '#E31A1C', 6 '#FDBF6F', 7 '#FF7F00' )
";

const JET: &str = "\
set style line 1 lt 1 lc rgb '#000090'
set style line 2 lt 1 lc rgb '#000FFF'
set style line 3 lt 1 lc rgb '#0090FF'
set style line 4 lt 1 lc rgb '#0FFFEE'
set style line 5 lt 1 lc rgb '#90FF70'
set style line 6 lt 1 lc rgb '#FFEE00'
set style line 7 lt 1 lc rgb '#FF7000'
set style line 8 lt 1 lc rgb '#EE0000'
set palette maxcolors 8
set palette defined ( 0 '#000090', 1 '#000FFF', 2 '#0090FF', 3 '#0FFFEE', 4 '#90FF70', 5 '#FFEE00', 6 '#FF7000', 7 '#EE0000' )
";

const PARULA: &str = "\
set style line 1 lt 1 lc rgb '#352A87'
set style line 2 lt 1 lc rgb '#0363E1'
set style line 3 lt 1 lc rgb '#1485D4'
set style line 4 lt 1 lc rgb '#06A7C6'
set style line 5 lt 1 lc rgb '#38B99E'
set style line 6 lt 1 lc rgb '#92BF73'
set style line 7 lt 1 lc rgb '#D9BA56'
set style line 8 lt 1 lc rgb '#FCCE2E'
set palette maxcolors 8
set palette defined ( 0 '#352A87', 1 '#0363E1', 2 '#1485D4', 3 '#06A7C6', 4 '#38B99E', 5 '#92BF73', 6 '#D9BA56', 7 '#FCCE2E' )
";

const VIRIDIS: &str = "\
set style line 1 lt 1 lc rgb '#440154'
set style line 2 lt 1 lc rgb '#472C7A'
set style line 3 lt 1 lc rgb '#3B518B'
set style line 4 lt 1 lc rgb '#2C718E'
set style line 5 lt 1 lc rgb '#21908D'
set style line 6 lt 1 lc rgb '#27AD81'
set style line 7 lt 1 lc rgb '#5CC863'
set style line 8 lt 1 lc rgb '#AADC32'
set palette maxcolors 8
set palette defined ( 0 '#440154', 1 '#472C7A', 2 '#3B518B', 3 '#2C718E', 4 '#21908D', 5 '#27AD81', 6 '#5CC863', 7 '#AADC32' )
";

/// Look up the command block for a palette name.
#[must_use]
pub fn commands(name: &str) -> Option<&'static str> {
    match name {
        "dark2" => Some(DARK2),
        "set1" => Some(SET1),
        "set2" => Some(SET2),
        "paired" => Some(PAIRED),
        "jet" => Some(JET),
        "parula" => Some(PARULA),
        "viridis" => Some(VIRIDIS),
        _ => None,
    }
}

/// Names of all embedded palettes.
#[must_use]
pub fn names() -> &'static [&'static str] {
    &["dark2", "set1", "set2", "paired", "jet", "parula", "viridis"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_embedded() {
        assert!(commands(DEFAULT_PALETTE).is_some());
    }

    #[test]
    fn test_all_names_resolve() {
        for name in names() {
            let block = commands(name).unwrap();
            assert_eq!(block.matches("set style line").count(), 8, "{name}");
            assert!(block.contains("set palette maxcolors 8"), "{name}");
            assert!(block.ends_with('\n'), "{name}");
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!(commands("no-such-palette").is_none());
    }
}
