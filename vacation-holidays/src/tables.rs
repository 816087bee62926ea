//! Built-in holiday tables.

use chrono::Weekday;

use crate::provider::CountryRules;
use crate::rule::{Holiday, HolidayRule, Observance};

const fn fixed(name: &'static str, month: u32, day: u32) -> Holiday {
    Holiday::new(name, HolidayRule::Fixed { month, day })
}

const fn easter(name: &'static str, offset: i64) -> Holiday {
    Holiday::new(name, HolidayRule::EasterOffset(offset))
}

const fn nth(name: &'static str, month: u32, weekday: Weekday, n: u8) -> Holiday {
    Holiday::new(name, HolidayRule::NthWeekday { month, weekday, n })
}

const fn last(name: &'static str, month: u32, weekday: Weekday) -> Holiday {
    Holiday::new(name, HolidayRule::LastWeekday { month, weekday })
}

const BR: &[Holiday] = &[
    fixed("Confraternização Universal", 1, 1),
    easter("Sexta-feira Santa", -2),
    fixed("Tiradentes", 4, 21),
    fixed("Dia do Trabalhador", 5, 1),
    fixed("Independência do Brasil", 9, 7),
    fixed("Nossa Senhora Aparecida", 10, 12),
    fixed("Finados", 11, 2),
    fixed("Proclamação da República", 11, 15),
    fixed("Dia Nacional de Zumbi e da Consciência Negra", 11, 20).since(2024),
    fixed("Natal", 12, 25),
];

const BR_SP: &[Holiday] = &[fixed("Revolução Constitucionalista de 1932", 7, 9)];

const BR_RJ: &[Holiday] = &[
    fixed("Dia de São Jorge", 4, 23),
    easter("Carnaval", -47),
];

// Data Magna (21 April) coincides with the national Tiradentes holiday.
const BR_MG: &[Holiday] = &[];

const US: &[Holiday] = &[
    fixed("New Year's Day", 1, 1).observed(Observance::NearestWeekday),
    nth("Martin Luther King Jr. Day", 1, Weekday::Mon, 3),
    nth("Washington's Birthday", 2, Weekday::Mon, 3),
    last("Memorial Day", 5, Weekday::Mon),
    fixed("Juneteenth National Independence Day", 6, 19)
        .observed(Observance::NearestWeekday)
        .since(2021),
    fixed("Independence Day", 7, 4).observed(Observance::NearestWeekday),
    nth("Labor Day", 9, Weekday::Mon, 1),
    nth("Columbus Day", 10, Weekday::Mon, 2),
    fixed("Veterans Day", 11, 11).observed(Observance::NearestWeekday),
    nth("Thanksgiving Day", 11, Weekday::Thu, 4),
    fixed("Christmas Day", 12, 25).observed(Observance::NearestWeekday),
];

const US_CA: &[Holiday] = &[fixed("Cesar Chavez Day", 3, 31).observed(Observance::NearestWeekday)];

const US_NY: &[Holiday] =
    &[fixed("Lincoln's Birthday", 2, 12).observed(Observance::NearestWeekday)];

const US_TX: &[Holiday] = &[
    fixed("Texas Independence Day", 3, 2),
    fixed("San Jacinto Day", 4, 21),
    fixed("Lyndon Baines Johnson Day", 8, 27),
];

const PT: &[Holiday] = &[
    fixed("Ano Novo", 1, 1),
    easter("Sexta-feira Santa", -2),
    easter("Páscoa", 0),
    fixed("Dia da Liberdade", 4, 25),
    fixed("Dia do Trabalhador", 5, 1),
    easter("Corpo de Deus", 60),
    fixed("Dia de Portugal", 6, 10),
    fixed("Assunção de Nossa Senhora", 8, 15),
    fixed("Implantação da República", 10, 5),
    fixed("Dia de Todos os Santos", 11, 1),
    fixed("Restauração da Independência", 12, 1),
    fixed("Imaculada Conceição", 12, 8),
    fixed("Dia de Natal", 12, 25),
];

const GB: &[Holiday] = &[
    fixed("New Year's Day", 1, 1).observed(Observance::FollowingWeekday),
    easter("Good Friday", -2),
    easter("Easter Monday", 1),
    nth("Early May bank holiday", 5, Weekday::Mon, 1),
    last("Spring bank holiday", 5, Weekday::Mon),
    last("Summer bank holiday", 8, Weekday::Mon),
    fixed("Christmas Day", 12, 25).observed(Observance::FollowingWeekday),
    fixed("Boxing Day", 12, 26).observed(Observance::FollowingWeekday),
];

/// Every country shipped with the crate.
pub(crate) const BUILTIN: &[CountryRules] = &[
    CountryRules::new("BR", BR, &[("SP", BR_SP), ("RJ", BR_RJ), ("MG", BR_MG)]),
    CountryRules::new("US", US, &[("CA", US_CA), ("NY", US_NY), ("TX", US_TX)]),
    CountryRules::new("PT", PT, &[]),
    CountryRules::new("GB", GB, &[]),
];
