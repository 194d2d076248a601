/// Static reference table for all 118 elements: symbol, name, atomic
/// number and the (period, group) coordinates of the standard 18-column
/// table. Lanthanum through ytterbium and actinium through nobelium have
/// no column of their own (`group: None`); the layout module decides
/// whether and where they are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub period: u8,
    pub group: Option<u8>,
}

impl Element {
    const fn new(
        number: u8,
        symbol: &'static str,
        name: &'static str,
        period: u8,
        group: Option<u8>,
    ) -> Self {
        Self {
            number,
            symbol,
            name,
            period,
            group,
        }
    }
}

/// Indexed by atomic number minus one.
pub static ELEMENTS: [Element; 118] = [
    // --- Period 1 ---
    Element::new(1, "H", "hydrogen", 1, Some(1)),
    Element::new(2, "He", "helium", 1, Some(18)),
    // --- Period 2 ---
    Element::new(3, "Li", "lithium", 2, Some(1)),
    Element::new(4, "Be", "beryllium", 2, Some(2)),
    Element::new(5, "B", "boron", 2, Some(13)),
    Element::new(6, "C", "carbon", 2, Some(14)),
    Element::new(7, "N", "nitrogen", 2, Some(15)),
    Element::new(8, "O", "oxygen", 2, Some(16)),
    Element::new(9, "F", "fluorine", 2, Some(17)),
    Element::new(10, "Ne", "neon", 2, Some(18)),
    // --- Period 3 ---
    Element::new(11, "Na", "sodium", 3, Some(1)),
    Element::new(12, "Mg", "magnesium", 3, Some(2)),
    Element::new(13, "Al", "aluminum", 3, Some(13)),
    Element::new(14, "Si", "silicon", 3, Some(14)),
    Element::new(15, "P", "phosphorus", 3, Some(15)),
    Element::new(16, "S", "sulfur", 3, Some(16)),
    Element::new(17, "Cl", "chlorine", 3, Some(17)),
    Element::new(18, "Ar", "argon", 3, Some(18)),
    // --- Period 4 ---
    Element::new(19, "K", "potassium", 4, Some(1)),
    Element::new(20, "Ca", "calcium", 4, Some(2)),
    Element::new(21, "Sc", "scandium", 4, Some(3)),
    Element::new(22, "Ti", "titanium", 4, Some(4)),
    Element::new(23, "V", "vanadium", 4, Some(5)),
    Element::new(24, "Cr", "chromium", 4, Some(6)),
    Element::new(25, "Mn", "manganese", 4, Some(7)),
    Element::new(26, "Fe", "iron", 4, Some(8)),
    Element::new(27, "Co", "cobalt", 4, Some(9)),
    Element::new(28, "Ni", "nickel", 4, Some(10)),
    Element::new(29, "Cu", "copper", 4, Some(11)),
    Element::new(30, "Zn", "zinc", 4, Some(12)),
    Element::new(31, "Ga", "gallium", 4, Some(13)),
    Element::new(32, "Ge", "germanium", 4, Some(14)),
    Element::new(33, "As", "arsenic", 4, Some(15)),
    Element::new(34, "Se", "selenium", 4, Some(16)),
    Element::new(35, "Br", "bromine", 4, Some(17)),
    Element::new(36, "Kr", "krypton", 4, Some(18)),
    // --- Period 5 ---
    Element::new(37, "Rb", "rubidium", 5, Some(1)),
    Element::new(38, "Sr", "strontium", 5, Some(2)),
    Element::new(39, "Y", "yttrium", 5, Some(3)),
    Element::new(40, "Zr", "zirconium", 5, Some(4)),
    Element::new(41, "Nb", "niobium", 5, Some(5)),
    Element::new(42, "Mo", "molybdenum", 5, Some(6)),
    Element::new(43, "Tc", "technetium", 5, Some(7)),
    Element::new(44, "Ru", "ruthenium", 5, Some(8)),
    Element::new(45, "Rh", "rhodium", 5, Some(9)),
    Element::new(46, "Pd", "palladium", 5, Some(10)),
    Element::new(47, "Ag", "silver", 5, Some(11)),
    Element::new(48, "Cd", "cadmium", 5, Some(12)),
    Element::new(49, "In", "indium", 5, Some(13)),
    Element::new(50, "Sn", "tin", 5, Some(14)),
    Element::new(51, "Sb", "antimony", 5, Some(15)),
    Element::new(52, "Te", "tellurium", 5, Some(16)),
    Element::new(53, "I", "iodine", 5, Some(17)),
    Element::new(54, "Xe", "xenon", 5, Some(18)),
    // --- Period 6 ---
    Element::new(55, "Cs", "cesium", 6, Some(1)),
    Element::new(56, "Ba", "barium", 6, Some(2)),
    Element::new(57, "La", "lanthanum", 6, None),
    Element::new(58, "Ce", "cerium", 6, None),
    Element::new(59, "Pr", "praseodymium", 6, None),
    Element::new(60, "Nd", "neodymium", 6, None),
    Element::new(61, "Pm", "promethium", 6, None),
    Element::new(62, "Sm", "samarium", 6, None),
    Element::new(63, "Eu", "europium", 6, None),
    Element::new(64, "Gd", "gadolinium", 6, None),
    Element::new(65, "Tb", "terbium", 6, None),
    Element::new(66, "Dy", "dysprosium", 6, None),
    Element::new(67, "Ho", "holmium", 6, None),
    Element::new(68, "Er", "erbium", 6, None),
    Element::new(69, "Tm", "thulium", 6, None),
    Element::new(70, "Yb", "ytterbium", 6, None),
    Element::new(71, "Lu", "lutetium", 6, Some(3)),
    Element::new(72, "Hf", "hafnium", 6, Some(4)),
    Element::new(73, "Ta", "tantalum", 6, Some(5)),
    Element::new(74, "W", "tungsten", 6, Some(6)),
    Element::new(75, "Re", "rhenium", 6, Some(7)),
    Element::new(76, "Os", "osmium", 6, Some(8)),
    Element::new(77, "Ir", "iridium", 6, Some(9)),
    Element::new(78, "Pt", "platinum", 6, Some(10)),
    Element::new(79, "Au", "gold", 6, Some(11)),
    Element::new(80, "Hg", "mercury", 6, Some(12)),
    Element::new(81, "Tl", "thallium", 6, Some(13)),
    Element::new(82, "Pb", "lead", 6, Some(14)),
    Element::new(83, "Bi", "bismuth", 6, Some(15)),
    Element::new(84, "Po", "polonium", 6, Some(16)),
    Element::new(85, "At", "astatine", 6, Some(17)),
    Element::new(86, "Rn", "radon", 6, Some(18)),
    // --- Period 7 ---
    Element::new(87, "Fr", "francium", 7, Some(1)),
    Element::new(88, "Ra", "radium", 7, Some(2)),
    Element::new(89, "Ac", "actinium", 7, None),
    Element::new(90, "Th", "thorium", 7, None),
    Element::new(91, "Pa", "protactinium", 7, None),
    Element::new(92, "U", "uranium", 7, None),
    Element::new(93, "Np", "neptunium", 7, None),
    Element::new(94, "Pu", "plutonium", 7, None),
    Element::new(95, "Am", "americium", 7, None),
    Element::new(96, "Cm", "curium", 7, None),
    Element::new(97, "Bk", "berkelium", 7, None),
    Element::new(98, "Cf", "californium", 7, None),
    Element::new(99, "Es", "einsteinium", 7, None),
    Element::new(100, "Fm", "fermium", 7, None),
    Element::new(101, "Md", "mendelevium", 7, None),
    Element::new(102, "No", "nobelium", 7, None),
    Element::new(103, "Lr", "lawrencium", 7, Some(3)),
    Element::new(104, "Rf", "rutherfordium", 7, Some(4)),
    Element::new(105, "Db", "dubnium", 7, Some(5)),
    Element::new(106, "Sg", "seaborgium", 7, Some(6)),
    Element::new(107, "Bh", "bohrium", 7, Some(7)),
    Element::new(108, "Hs", "hassium", 7, Some(8)),
    Element::new(109, "Mt", "meitnerium", 7, Some(9)),
    Element::new(110, "Ds", "darmstadtium", 7, Some(10)),
    Element::new(111, "Rg", "roentgenium", 7, Some(11)),
    Element::new(112, "Cn", "copernicium", 7, Some(12)),
    Element::new(113, "Nh", "nihonium", 7, Some(13)),
    Element::new(114, "Fl", "flerovium", 7, Some(14)),
    Element::new(115, "Mc", "moscovium", 7, Some(15)),
    Element::new(116, "Lv", "livermorium", 7, Some(16)),
    Element::new(117, "Ts", "tennessine", 7, Some(17)),
    Element::new(118, "Og", "oganesson", 7, Some(18)),
];

/// Case-insensitive symbol lookup ("fe", "Fe" and "FE" all match iron).
pub fn by_symbol(symbol: &str) -> Option<&'static Element> {
    ELEMENTS
        .iter()
        .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
}
