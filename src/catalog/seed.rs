use super::record::{CarbonCreditRecord, CreditStatus};

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    registry_serial: &str,
    project_name: &str,
    location: &str,
    country: &str,
    registry: &str,
    vintage_year: u16,
    status: CreditStatus,
    trust_score: f64,
    available_quantity: u32,
    price_per_unit: f64,
    project_category: &str,
    image_ref: &str,
) -> CarbonCreditRecord {
    CarbonCreditRecord {
        id: id.to_string(),
        registry_serial: registry_serial.to_string(),
        project_name: project_name.to_string(),
        location: location.to_string(),
        country: country.to_string(),
        registry: registry.to_string(),
        vintage_year,
        status,
        trust_score,
        available_quantity,
        price_per_unit,
        project_category: project_category.to_string(),
        image_ref: image_ref.to_string(),
    }
}

/// The built-in marketplace dataset. Constructed once at startup and
/// never mutated for the rest of the session.
pub fn seed_records() -> Vec<CarbonCreditRecord> {
    use CreditStatus::{Active, Pending, Retired};

    vec![
        record(
            "VCX-001", "VCS-0934-2019-BR", "Amazon Rainforest Conservation",
            "Pará", "Brazil", "Verra", 2019, Active, 92.0, 1500, 18.50,
            "Forestry", "img/amazon-rainforest.webp",
        ),
        record(
            "VCX-002", "GS-3301-2020-IN", "Rajasthan Solar Park",
            "Rajasthan", "India", "Gold Standard", 2020, Active, 86.0, 3200, 9.90,
            "Renewable Energy", "img/rajasthan-solar.webp",
        ),
        record(
            "VCX-003", "CAR-1200-2019-US", "Iowa Landfill Gas Recovery",
            "Iowa", "United States", "Climate Action Reserve", 2019, Active, 74.0, 1320, 5.60,
            "Methane Capture", "img/iowa-landfill.webp",
        ),
        record(
            "VCX-004", "VCS-1187-2020-ID", "Borneo Peatland Restoration",
            "Central Kalimantan", "Indonesia", "Verra", 2020, Active, 88.5, 940, 15.25,
            "Forestry", "img/borneo-peatland.webp",
        ),
        record(
            "VCX-005", "GS-2876-2019-TR", "Anatolian Wind Cluster",
            "Izmir", "Turkey", "Gold Standard", 2019, Active, 82.5, 2750, 8.60,
            "Renewable Energy", "img/anatolia-wind.webp",
        ),
        record(
            "VCX-006", "VCS-1980-2021-MX", "Yucatán Mangrove Recovery",
            "Yucatán", "Mexico", "Verra", 2021, Active, 91.0, 540, 22.40,
            "Blue Carbon", "img/yucatan-mangrove.webp",
        ),
        record(
            "VCX-007", "GS-4410-2018-KE", "Kenya Highlands Reforestation",
            "Rift Valley", "Kenya", "Gold Standard", 2018, Active, 84.0, 620, 12.80,
            "Forestry", "img/kenya-highlands.webp",
        ),
        record(
            "VCX-008", "GS-1502-2018-UG", "Kampala Clean Cookstoves",
            "Kampala", "Uganda", "Gold Standard", 2018, Active, 81.0, 2300, 4.35,
            "Cookstoves", "img/kampala-stoves.webp",
        ),
        record(
            "VCX-009", "VCS-1764-2021-CL", "Atacama Desert Solar",
            "Antofagasta", "Chile", "Verra", 2021, Active, 89.0, 1880, 10.45,
            "Renewable Energy", "img/atacama-solar.webp",
        ),
        record(
            "VCX-010", "ACR-0781-2020-US", "Permian Basin Leak Abatement",
            "Texas", "United States", "American Carbon Registry", 2020, Active, 70.5, 1650, 6.25,
            "Methane Capture", "img/permian-basin.webp",
        ),
        record(
            "VCX-011", "ACR-0552-2021-US", "Appalachian Improved Forest Management",
            "West Virginia", "United States", "American Carbon Registry", 2021, Active, 79.5, 2100, 14.10,
            "Forestry", "img/appalachia-forest.webp",
        ),
        record(
            "VCX-012", "VCS-2130-2019-KE", "Lamu Seagrass Meadows",
            "Lamu", "Kenya", "Verra", 2019, Active, 87.5, 310, 24.90,
            "Blue Carbon", "img/lamu-seagrass.webp",
        ),
        record(
            "VCX-013", "CAR-0917-2018-MX", "Oaxaca Wind Corridor",
            "Oaxaca", "Mexico", "Climate Action Reserve", 2018, Retired, 77.0, 0, 7.95,
            "Renewable Energy", "img/oaxaca-wind.webp",
        ),
        record(
            "VCX-014", "VCS-2552-2021-AU", "Queensland Soil Carbon Trial",
            "Queensland", "Australia", "Verra", 2021, Active, 72.5, 1140, 13.30,
            "Soil Carbon", "img/queensland-soil.webp",
        ),
        record(
            "VCX-015", "VCS-2210-2017-PE", "Madre de Dios Avoided Deforestation",
            "Madre de Dios", "Peru", "Verra", 2017, Retired, 90.0, 0, 16.75,
            "Forestry", "img/madre-de-dios.webp",
        ),
        record(
            "VCX-016", "GS-1688-2020-NP", "Terai Household Stove Upgrade",
            "Lumbini", "Nepal", "Gold Standard", 2020, Active, 78.5, 1950, 4.80,
            "Cookstoves", "img/terai-stoves.webp",
        ),
        record(
            "VCX-017", "GS-6003-2022-MA", "Noor Concentrated Solar Extension",
            "Ouarzazate", "Morocco", "Gold Standard", 2022, Active, 85.5, 4100, 11.20,
            "Renewable Energy", "img/noor-solar.webp",
        ),
        record(
            "VCX-018", "ACR-0990-2019-AR", "Pampas Regenerative Grazing",
            "Buenos Aires", "Argentina", "American Carbon Registry", 2019, Active, 75.0, 1360, 12.60,
            "Soil Carbon", "img/pampas-grazing.webp",
        ),
        record(
            "VCX-019", "GS-5120-2022-VN", "Annamite Range Forest Protection",
            "Quang Nam", "Vietnam", "Gold Standard", 2022, Pending, 71.0, 480, 11.40,
            "Forestry", "img/annamite-forest.webp",
        ),
        record(
            "VCX-020", "CAR-1456-2021-CA", "Alberta Dairy Biodigesters",
            "Alberta", "Canada", "Climate Action Reserve", 2021, Active, 76.0, 880, 7.10,
            "Methane Capture", "img/alberta-biodigesters.webp",
        ),
        record(
            "VCX-021", "VCS-2408-2020-PH", "Luzon Run-of-River Hydro",
            "Benguet", "Philippines", "Verra", 2020, Pending, 68.0, 900, 6.80,
            "Renewable Energy", "img/luzon-hydro.webp",
        ),
        record(
            "VCX-022", "GS-7045-2022-ID", "Java Coastal Wetlands",
            "East Java", "Indonesia", "Gold Standard", 2022, Pending, 66.5, 720, 19.80,
            "Blue Carbon", "img/java-wetlands.webp",
        ),
        record(
            "VCX-023", "CAR-1710-2022-US", "Montana No-Till Cropland",
            "Montana", "United States", "Climate Action Reserve", 2022, Active, 69.5, 1020, 12.95,
            "Soil Carbon", "img/montana-no-till.webp",
        ),
    ]
}
