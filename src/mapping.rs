// Static unit -> region group lookup.
//
// The table is fixed by the reporting structure and is not configurable:
// every known subdivision maps to one of the coarse regional groupings
// (ПдРУ, ЗхРУ, СхРУ, ЧЦП, РУМО). Lookups are case-sensitive exact matches.
use once_cell::sync::Lazy;
use std::collections::HashMap;

static UNIT_TO_REGION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ДОРД", "ЧЦП"),
        ("Ізмаїльського", "ПдРУ"),
        ("Бердянського", "ПдРУ"),
        ("Білгород-Дністровського", "ПдРУ"),
        ("Житомирського", "ЧЦП"),
        ("ЗхРУ", "ЗхРУ"),
        ("Краматорськ", "СхРУ"),
        ("Волинського", "ЗхРУ"),
        ("Карпатського", "ЗхРУ"),
        ("Могилів-Подільського", "ПдРУ"),
        ("Мукачівського", "ЗхРУ"),
        ("ОКПП \"Київ\"", "ЧЦП"),
        ("Одеського", "ПдРУ"),
        ("ПдРУ", "ПдРУ"),
        ("Подільського", "ПдРУ"),
        ("РУМО", "РУМО"),
        ("РУМО Ізмаїл", "РУМО"),
        ("РУМО Маріуполь", "РУМО"),
        ("РУМО Одеса", "РУМО"),
        ("Сумського", "СхРУ"),
        ("СхРУ", "СхРУ"),
        ("Харківського", "СхРУ"),
        ("Херсонського", "ПдРУ"),
        ("Чернівецького", "ЗхРУ"),
        ("Чернігівського", "ЧЦП"),
        ("Чопського", "ЗхРУ"),
    ])
});

/// Look up the region group for a unit name. Unknown units yield `None`,
/// which renders as an empty field in the output rather than an error.
pub fn region_for(unit: &str) -> Option<&'static str> {
    UNIT_TO_REGION.get(unit).copied()
}
