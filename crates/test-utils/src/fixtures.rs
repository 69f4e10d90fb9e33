//! Sample activity exports.
//!
//! Expected totals are spelled out next to each export so tests can assert
//! against them without recomputing.

/// Czech-locale export with records in 2024 and 2023.
///
/// 2024: 4 activities (Běh ×2, Cyklistika, Plavání v bazénu), 14 990 steps,
/// 59.33 km (the 1 500 m swim counts as 1.5 km), 505 m ascent, 2 617 kcal,
/// 13 732 s.
/// 2023: 1 activity (Běh), 7 800 steps, 8 km, 60 m, 590 kcal, 2 640 s.
pub const CZECH_EXPORT: &str = "\
Typ aktivity,Datum,Oblíbené,Název,Vzdálenost,Kalorie,Čas,Průměrná TF,Celkový výstup,Kroky
Běh,2024-12-30 07:15:00,false,\"Praha Běh\",\"10,52\",\"712\",\"00:55:12\",150,\"85\",9 870
Cyklistika,2024-11-02 09:00:00,false,\"Praha Cyklistika\",\"42,30\",\"1 105\",\"01:45:00\",128,\"420\",--
Běh,2024-06-15 18:30:00,false,\"Večerní běh\",\"5,01\",\"380\",\"00:28:40\",155,--,5 120
Plavání v bazénu,2024-03-04 06:45:00,false,\"Bazén\",\"1 500\",\"420\",\"00:40:00\",120,--,--
Běh,2023-12-31 10:00:00,false,\"Silvestrovský běh\",\"8,00\",\"590\",\"00:44:00\",148,\"60\",7 800
";

/// English-locale export, all in 2025.
///
/// 3 activities with distinct types (Running first), 8 300 steps, 20.05 km,
/// 155 m ascent (the walk has an empty ascent cell), 1 080 kcal, 5 620 s.
pub const ENGLISH_EXPORT: &str = "\
Activity Type,Date,Favorite,Title,Distance,Calories,Time,Avg HR,Total Ascent,Steps
Running,2025-01-05 08:00:00,false,\"Morning Run\",\"5.20\",\"410\",\"00:27:30\",\"152\",\"45\",\"5,400\"
Cycling,2025-02-10 17:30:00,false,\"Commute\",\"12.75\",\"520\",\"00:41:10\",\"130\",\"110\",\"--\"
Walking,2025-02-11 12:00:00,false,\"Lunch Walk\",\"2.10\",\"150\",\"00:25:00\",\"95\",\"\",\"2,900\"
";

/// Same rows as the first two of [`ENGLISH_EXPORT`] with the columns shuffled
/// and without the optional ascent and steps columns.
pub const REORDERED_EXPORT: &str = "\
Time,Calories,Distance,Date,Activity Type
00:27:30,410,5.20,2025-01-05 08:00:00,Running
00:41:10,520,12.75,2025-02-10 17:30:00,Cycling
";

/// Run/Bike tie in 2024: both types occur twice, Run first.
pub const TIE_EXPORT: &str = "\
Date,Activity Type,Time,Distance,Calories,Steps
2024-01-01,Run,00:30:00,5.0,300,5000
2024-01-02,Bike,01:00:00,20.0,500,0
2024-01-03,Run,00:30:00,5.0,300,5000
2024-01-04,Bike,01:00:00,20.0,500,0
";

/// Export without a distance column.
pub const MISSING_DISTANCE_EXPORT: &str = "\
Date,Activity Type,Time,Calories
2024-01-01,Run,00:30:00,300
";

/// Export whose second data row has an unreadable distance.
pub const BAD_DISTANCE_EXPORT: &str = "\
Date,Activity Type,Time,Distance,Calories
2024-01-01,Run,00:30:00,5.0,300
2024-01-02,Run,00:30:00,five,300
2024-01-03,Run,00:30:00,5.0,300
";

/// Header only.
pub const HEADER_ONLY_EXPORT: &str = "\
Date,Activity Type,Time,Distance,Calories,Total Ascent,Steps
";
