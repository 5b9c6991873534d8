//! Built-in demo catalog: six Kuwait screens used by the demo binary and
//! the integration tests when no snapshot file is configured.

use crate::catalog::ScreenCatalog;
use screenbook_core::types::{
    AgeBand, AgeSplit, Demographics, GenderBand, GenderSplit, NationalityBand, NationalitySplit,
    ReachMetrics, Screen, ScreenSpecs, ScreenType,
};
use tracing::info;

impl ScreenCatalog {
    /// Seed the demo inventory. Infallible: the records below satisfy the
    /// catalog invariants by construction.
    pub fn seed_demo() -> Self {
        let screens = vec![
            Screen {
                id: "SCR-001".to_string(),
                name: "Mubrakiya Main Plaza".to_string(),
                location: "Mubrakiya".to_string(),
                governorate: "Capital".to_string(),
                country: "Kuwait".to_string(),
                screen_type: ScreenType::Outdoor,
                resolution: "1920x1080".to_string(),
                size: "40ft x 20ft".to_string(),
                total_quantity: 5,
                base_price_per_hour: 50.0,
                audience: "High Traffic, Tourists".to_string(),
                description:
                    "Located in the heart of the historic souq, visible to thousands of shoppers daily."
                        .to_string(),
                tags: vec!["Peak Hours".to_string(), "Outdoor".to_string()],
                specs: ScreenSpecs {
                    physical_size: "12m x 6m".to_string(),
                    operating_hours: "08:00 AM - 11:00 PM".to_string(),
                    category: "Heritage Site".to_string(),
                    resolution_text: "Full HD (1920 x 1080)".to_string(),
                    ..Default::default()
                },
                metrics: ReachMetrics {
                    daily: 75_000,
                    weekly: 525_000,
                    monthly: 2_250_000,
                },
                demographics: Demographics {
                    nationality: NationalitySplit {
                        kuwaiti: 43,
                        arab: 27,
                        non_arab: 30,
                    },
                    gender: GenderSplit { male: 67, female: 33 },
                    age: AgeSplit {
                        boomers: 24,
                        gen_x: 28,
                        millennials: 29,
                        gen_z: 19,
                    },
                    main_gender: GenderBand::Male,
                    main_age_group: AgeBand::Millennials,
                    main_nationality: NationalityBand::Kuwaiti,
                },
            },
            Screen {
                id: "SCR-002".to_string(),
                name: "Al Salam Mall Entrance".to_string(),
                location: "Al Salam Mall Salmiya".to_string(),
                governorate: "Hawally".to_string(),
                country: "Kuwait".to_string(),
                screen_type: ScreenType::Indoor,
                resolution: "1080x1920".to_string(),
                size: "55 inch".to_string(),
                total_quantity: 10,
                base_price_per_hour: 15.0,
                audience: "Shoppers, Families".to_string(),
                description: "Prime placement at the main entrance, capturing all incoming footfall."
                    .to_string(),
                tags: vec!["Indoor".to_string(), "High Dwell Time".to_string()],
                specs: ScreenSpecs {
                    physical_size: "1.2m x 0.7m".to_string(),
                    category: "Shopping Mall".to_string(),
                    resolution_text: "Full HD Portrait (1080 x 1920)".to_string(),
                    ..Default::default()
                },
                metrics: ReachMetrics {
                    daily: 40_000,
                    weekly: 280_000,
                    monthly: 1_200_000,
                },
                demographics: Demographics {
                    nationality: NationalitySplit {
                        kuwaiti: 39,
                        arab: 32,
                        non_arab: 29,
                    },
                    gender: GenderSplit { male: 60, female: 40 },
                    age: AgeSplit {
                        boomers: 18,
                        gen_x: 24,
                        millennials: 35,
                        gen_z: 23,
                    },
                    main_gender: GenderBand::Female,
                    main_age_group: AgeBand::GenZ,
                    main_nationality: NationalityBand::Arab,
                },
            },
            Screen {
                id: "SCR-003".to_string(),
                name: "Fnaitees Highway Board".to_string(),
                location: "Fnaitees".to_string(),
                governorate: "M.Kabeer".to_string(),
                country: "Kuwait".to_string(),
                screen_type: ScreenType::Outdoor,
                resolution: "3840x2160".to_string(),
                size: "20ft x 10ft".to_string(),
                total_quantity: 3,
                base_price_per_hour: 30.0,
                audience: "Commuters".to_string(),
                description: "High-visibility digital billboard on the major coastal highway."
                    .to_string(),
                tags: vec!["Highway".to_string(), "Outdoor".to_string()],
                specs: ScreenSpecs {
                    physical_size: "6m x 3m".to_string(),
                    operating_hours: "24 Hours".to_string(),
                    category: "Highway".to_string(),
                    resolution_text: "4K Ultra HD (3840 x 2160)".to_string(),
                    ..Default::default()
                },
                metrics: ReachMetrics {
                    daily: 120_000,
                    weekly: 840_000,
                    monthly: 3_600_000,
                },
                demographics: Demographics {
                    nationality: NationalitySplit {
                        kuwaiti: 45,
                        arab: 25,
                        non_arab: 30,
                    },
                    gender: GenderSplit { male: 80, female: 20 },
                    age: AgeSplit {
                        boomers: 20,
                        gen_x: 40,
                        millennials: 30,
                        gen_z: 10,
                    },
                    main_gender: GenderBand::Male,
                    main_age_group: AgeBand::GenX,
                    main_nationality: NationalityBand::NonArab,
                },
            },
            Screen {
                id: "SCR-004".to_string(),
                name: "Divonne Complex Center".to_string(),
                location: "Divonne Complex".to_string(),
                governorate: "Ahmadi".to_string(),
                country: "Kuwait".to_string(),
                screen_type: ScreenType::Indoor,
                resolution: "1280x720".to_string(),
                size: "85 inch".to_string(),
                total_quantity: 8,
                base_price_per_hour: 20.0,
                audience: "Elite, Shoppers".to_string(),
                description: "Luxury complex screen targeting affluent visitors.".to_string(),
                tags: vec!["Indoor".to_string(), "Luxury".to_string()],
                specs: ScreenSpecs {
                    physical_size: "1.9m x 1.1m".to_string(),
                    operating_hours: "10:00 AM - 11:00 PM".to_string(),
                    category: "Luxury Complex".to_string(),
                    resolution_text: "HD (1280 x 720)".to_string(),
                    ..Default::default()
                },
                metrics: ReachMetrics {
                    daily: 25_000,
                    weekly: 175_000,
                    monthly: 750_000,
                },
                demographics: Demographics {
                    nationality: NationalitySplit {
                        kuwaiti: 60,
                        arab: 20,
                        non_arab: 20,
                    },
                    gender: GenderSplit { male: 45, female: 55 },
                    age: AgeSplit {
                        boomers: 40,
                        gen_x: 30,
                        millennials: 20,
                        gen_z: 10,
                    },
                    main_gender: GenderBand::Female,
                    main_age_group: AgeBand::Boomers,
                    main_nationality: NationalityBand::Kuwaiti,
                },
            },
            Screen {
                id: "SCR-005".to_string(),
                name: "Riyadh Park Digital".to_string(),
                location: "Riyadh Park".to_string(),
                governorate: "Farwania".to_string(),
                country: "Kuwait".to_string(),
                screen_type: ScreenType::Indoor,
                resolution: "1920x1080".to_string(),
                size: "65 inch".to_string(),
                total_quantity: 12,
                base_price_per_hour: 25.0,
                audience: "Shoppers".to_string(),
                description: "Vibrant screen in the food court area of Riyadh Park.".to_string(),
                tags: vec!["Indoor".to_string(), "Food Court".to_string()],
                specs: ScreenSpecs {
                    physical_size: "1.5m x 0.9m".to_string(),
                    operating_hours: "09:00 AM - 12:00 AM".to_string(),
                    category: "Shopping Mall".to_string(),
                    resolution_text: "Full HD (1920 x 1080)".to_string(),
                    ..Default::default()
                },
                metrics: ReachMetrics {
                    daily: 60_000,
                    weekly: 420_000,
                    monthly: 1_800_000,
                },
                demographics: Demographics {
                    nationality: NationalitySplit {
                        kuwaiti: 30,
                        arab: 50,
                        non_arab: 20,
                    },
                    gender: GenderSplit { male: 55, female: 45 },
                    age: AgeSplit {
                        boomers: 10,
                        gen_x: 20,
                        millennials: 40,
                        gen_z: 30,
                    },
                    main_gender: GenderBand::Male,
                    main_age_group: AgeBand::Millennials,
                    main_nationality: NationalityBand::Arab,
                },
            },
            Screen {
                id: "SCR-006".to_string(),
                name: "Doha Corniche LED".to_string(),
                location: "Corniche".to_string(),
                governorate: "Jahara".to_string(),
                country: "Kuwait".to_string(),
                screen_type: ScreenType::Outdoor,
                resolution: "3840x2160".to_string(),
                size: "30ft x 15ft".to_string(),
                total_quantity: 4,
                base_price_per_hour: 60.0,
                audience: "Tourists, Locals".to_string(),
                description: "Iconic LED screen along the Doha Corniche waterfront.".to_string(),
                tags: vec!["Outdoor".to_string(), "Iconic".to_string()],
                specs: ScreenSpecs {
                    physical_size: "10m x 5m".to_string(),
                    operating_hours: "05:00 PM - 02:00 AM".to_string(),
                    category: "Public Space".to_string(),
                    resolution_text: "4K Ultra HD".to_string(),
                    ..Default::default()
                },
                metrics: ReachMetrics {
                    daily: 90_000,
                    weekly: 630_000,
                    monthly: 2_700_000,
                },
                demographics: Demographics {
                    nationality: NationalitySplit {
                        kuwaiti: 20,
                        arab: 30,
                        non_arab: 50,
                    },
                    gender: GenderSplit { male: 50, female: 50 },
                    age: AgeSplit {
                        boomers: 5,
                        gen_x: 10,
                        millennials: 35,
                        gen_z: 50,
                    },
                    main_gender: GenderBand::Female,
                    main_age_group: AgeBand::GenZ,
                    main_nationality: NationalityBand::NonArab,
                },
            },
        ];

        let mut catalog = Self::new();
        for screen in screens {
            // Seed records are valid by construction.
            catalog
                .insert(screen)
                .expect("demo seed screen must satisfy catalog invariants");
        }

        info!(screens = catalog.len(), "Seeded demo screen catalog");
        catalog
    }
}
