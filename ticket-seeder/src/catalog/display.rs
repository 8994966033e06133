use time::{Date, Time};

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

pub fn display_date(date: Date) -> String {
    let month_name = MONTH_NAMES[usize::from(u8::from(date.month())) - 1];

    format!("{} de {} de {}", date.day(), month_name, date.year())
}

pub fn display_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
