//! The built-in dataset: festivals, destination packages and location tables.
//!
//! Everything here is `'static` and read-only. Declaration order matters:
//! queries and recommendations return items in the order they appear below.

use crate::types::{
    BudgetRange, CountrySpecialties, DestinationPackage, Festival, Month, MonthFestivals, Season,
    SeasonFestivals,
};

use BudgetRange::{BudgetFriendly, Expensive, Moderate};

const fn festival(
    name: &'static str,
    country: &'static str,
    description: &'static str,
    budget_range: BudgetRange,
) -> Festival {
    Festival {
        name,
        country,
        description,
        budget_range,
    }
}

// =============================================================================
// Festivals (season -> month -> festivals)
// =============================================================================

#[rustfmt::skip]
pub static SEASONAL_FESTIVALS: &[SeasonFestivals] = &[
    SeasonFestivals {
        season: Season::Spring,
        months: &[
            MonthFestivals {
                month: Month::March,
                festivals: &[
                    festival("Holi Festival", "India", "Festival of Colors", BudgetFriendly),
                    festival("Cherry Blossom Festival", "Japan", "Beautiful pink sakura blooms", Moderate),
                    festival("St. Patrick's Day", "Ireland", "Irish cultural celebration", Moderate),
                    festival("Las Fallas", "Spain", "Fire festival in Valencia", Moderate),
                ],
            },
            MonthFestivals {
                month: Month::April,
                festivals: &[
                    festival("Songkran", "Thailand", "Water Festival", BudgetFriendly),
                    festival("Tulip Festival", "Netherlands", "Colorful tulip displays", Moderate),
                    festival("Easter Celebrations", "Greece", "Orthodox Easter traditions", Moderate),
                    festival("Queen's Birthday", "UK", "Royal celebrations in London", Expensive),
                ],
            },
            MonthFestivals {
                month: Month::May,
                festivals: &[
                    festival("Cinco de Mayo", "Mexico", "Mexican celebration", BudgetFriendly),
                    festival("Chelsea Flower Show", "UK", "Premier gardening event in London", Expensive),
                    festival("Cannes Film Festival", "France", "International film festival", Expensive),
                    festival("Eurovision Song Contest", "Europe", "Annual music competition", Expensive),
                ],
            },
        ],
    },
    SeasonFestivals {
        season: Season::Summer,
        months: &[
            MonthFestivals {
                month: Month::June,
                festivals: &[
                    festival("Edinburgh Festival", "Scotland", "Arts and culture festival", Expensive),
                    festival("Midsummer", "Sweden", "Traditional Swedish celebration", Moderate),
                    festival("Wimbledon", "UK", "Tennis championships in London", Expensive),
                    festival("White Nights", "Russia", "Cultural festival in St. Petersburg", Moderate),
                ],
            },
            MonthFestivals {
                month: Month::July,
                festivals: &[
                    festival("Gion Matsuri", "Japan", "Traditional Japanese festival", Expensive),
                    festival("Running of Bulls", "Spain", "Pamplona festival", Moderate),
                    festival("Bastille Day", "France", "French national celebration", Moderate),
                    festival("Notting Hill Carnival Preparation", "UK", "Caribbean culture in London", Moderate),
                ],
            },
            MonthFestivals {
                month: Month::August,
                festivals: &[
                    festival("Edinburgh Fringe", "Scotland", "World's largest arts festival", Expensive),
                    festival("Notting Hill Carnival", "UK", "Caribbean street festival in London", Moderate),
                    festival("La Tomatina", "Spain", "Tomato throwing festival", BudgetFriendly),
                    festival("Burning Man", "USA", "Art and music festival in Nevada", Expensive),
                ],
            },
        ],
    },
    SeasonFestivals {
        season: Season::Autumn,
        months: &[
            MonthFestivals {
                month: Month::September,
                festivals: &[
                    festival("Oktoberfest", "Germany", "Beer festival in Munich", Moderate),
                    festival("Mid-Autumn Festival", "China", "Moon cake festival", BudgetFriendly),
                    festival("London Fashion Week", "UK", "Fashion industry showcase", Expensive),
                    festival("Harvest Festival", "Italy", "Wine and food celebrations", Moderate),
                ],
            },
            MonthFestivals {
                month: Month::October,
                festivals: &[
                    festival("Diwali", "India", "Festival of Lights", BudgetFriendly),
                    festival("Day of the Dead", "Mexico", "Colorful Mexican tradition", BudgetFriendly),
                    festival("Halloween", "Ireland", "Traditional Celtic celebration", BudgetFriendly),
                    festival("Lord Mayor's Show", "UK", "Historic London parade", BudgetFriendly),
                ],
            },
            MonthFestivals {
                month: Month::November,
                festivals: &[
                    festival("Loy Krathong", "Thailand", "Floating lantern festival", BudgetFriendly),
                    festival("Guy Fawkes Night", "UK", "Bonfire night celebrations", BudgetFriendly),
                    festival("Diwali Celebrations", "UK", "Festival of Lights in London", BudgetFriendly),
                ],
            },
        ],
    },
    SeasonFestivals {
        season: Season::Winter,
        months: &[
            MonthFestivals {
                month: Month::December,
                festivals: &[
                    festival("Christmas Markets", "Germany", "Traditional German markets", Moderate),
                    festival("New Year's Eve", "Australia", "Sydney Harbor fireworks", Expensive),
                    festival("London Christmas Markets", "UK", "Festive markets across London", Moderate),
                    festival("Winter Solstice", "UK", "Stonehenge celebrations", BudgetFriendly),
                ],
            },
            MonthFestivals {
                month: Month::January,
                festivals: &[
                    festival("Chinese New Year", "Singapore", "Lunar New Year celebrations", Moderate),
                    festival("London New Year Parade", "UK", "Street parade through central London", BudgetFriendly),
                    festival("Burns Night", "Scotland", "Scottish cultural celebration", Moderate),
                ],
            },
            MonthFestivals {
                month: Month::February,
                festivals: &[
                    festival("Carnival", "Brazil", "Rio de Janeiro carnival", Expensive),
                    festival("Lantern Festival", "Taiwan", "Sky lantern festival", Moderate),
                    festival("Valentine's Day", "UK", "Romantic celebrations in London", Moderate),
                    festival("Venice Carnival", "Italy", "Masked carnival in Venice", Expensive),
                ],
            },
        ],
    },
];

// =============================================================================
// Destination packages
// =============================================================================

pub static DESTINATIONS: &[DestinationPackage] = &[
    DestinationPackage {
        title: "Royal London Experience",
        description: "Palaces, West End shows and afternoon tea in the capital",
        countries: &["UK"],
        country_match: Some("UK"),
        budget_range: Expensive,
    },
    DestinationPackage {
        title: "London on a Shoestring",
        description: "Free museums, markets and walking tours across London",
        countries: &["UK"],
        country_match: Some("UK"),
        budget_range: BudgetFriendly,
    },
    DestinationPackage {
        title: "Paris & the French Riviera",
        description: "Art, cuisine and the Mediterranean coast",
        countries: &["France"],
        country_match: Some("France"),
        budget_range: Expensive,
    },
    DestinationPackage {
        title: "Mediterranean Island Hopping",
        description: "Beaches and old towns across Spain, Italy and Greece",
        countries: &["Spain", "Italy", "Greece"],
        country_match: None,
        budget_range: Moderate,
    },
    DestinationPackage {
        title: "Southeast Asia Backpacker Trail",
        description: "Temples, islands and street food across Southeast Asia",
        countries: &["Thailand", "Indonesia", "Philippines"],
        country_match: None,
        budget_range: BudgetFriendly,
    },
    DestinationPackage {
        title: "Japan Cultural Discovery",
        description: "Tokyo, Kyoto and Osaka with a rail pass",
        countries: &["Japan"],
        country_match: Some("Japan"),
        budget_range: Moderate,
    },
    DestinationPackage {
        title: "Bavarian Castles & Beer Halls",
        description: "Munich, fairy-tale castles and Alpine villages",
        countries: &["Germany"],
        country_match: Some("Germany"),
        budget_range: Moderate,
    },
    DestinationPackage {
        title: "Grand European Capitals",
        description: "London, Paris and Berlin by high-speed rail",
        countries: &["UK", "France", "Germany"],
        country_match: None,
        budget_range: Expensive,
    },
];

// =============================================================================
// Country specialties (keys form the canonical country set)
// =============================================================================

#[rustfmt::skip]
pub static COUNTRY_SPECIALTIES: &[CountrySpecialties] = &[
    CountrySpecialties { country: "India", specialties: &["cultural festivals", "spiritual experiences", "budget-friendly"] },
    CountrySpecialties { country: "Japan", specialties: &["traditional culture", "seasonal beauty", "unique experiences"] },
    CountrySpecialties { country: "Germany", specialties: &["oktoberfest", "christmas markets", "cultural events"] },
    CountrySpecialties { country: "Thailand", specialties: &["water festivals", "floating lanterns", "tropical experiences"] },
    CountrySpecialties { country: "Brazil", specialties: &["carnival", "vibrant culture", "beach festivals"] },
    CountrySpecialties { country: "Mexico", specialties: &["colorful traditions", "day of dead", "cultural celebrations"] },
    CountrySpecialties { country: "UK", specialties: &["royal events", "historic traditions", "premier cultural events"] },
    CountrySpecialties { country: "France", specialties: &["art festivals", "culinary experiences", "cultural heritage"] },
    CountrySpecialties { country: "Spain", specialties: &["vibrant festivals", "historical celebrations", "passionate culture"] },
    CountrySpecialties { country: "Italy", specialties: &["art and culture", "culinary festivals", "historical events"] },
    CountrySpecialties { country: "Ireland", specialties: &["celtic traditions", "cultural celebrations", "friendly atmosphere"] },
    CountrySpecialties { country: "Scotland", specialties: &["highland culture", "arts festivals", "historic celebrations"] },
    CountrySpecialties { country: "Netherlands", specialties: &["flower festivals", "cultural events", "unique experiences"] },
    CountrySpecialties { country: "Greece", specialties: &["ancient traditions", "religious festivals", "mediterranean culture"] },
    CountrySpecialties { country: "Sweden", specialties: &["nordic traditions", "midsummer celebrations", "natural beauty"] },
    CountrySpecialties { country: "Russia", specialties: &["cultural festivals", "classical arts", "winter celebrations"] },
    CountrySpecialties { country: "USA", specialties: &["diverse festivals", "music and arts", "modern celebrations"] },
    CountrySpecialties { country: "Australia", specialties: &["outdoor celebrations", "new year events", "beach culture"] },
    CountrySpecialties { country: "Singapore", specialties: &["multicultural festivals", "modern celebrations", "asian fusion"] },
    CountrySpecialties { country: "Taiwan", specialties: &["traditional festivals", "lantern celebrations", "cultural heritage"] },
    CountrySpecialties { country: "China", specialties: &["traditional festivals", "cultural heritage", "seasonal celebrations"] },
    CountrySpecialties { country: "Europe", specialties: &["diverse cultures", "international events", "historic celebrations"] },
];

// =============================================================================
// Location tables (lowercase keys)
// =============================================================================

pub static CITY_COUNTRY: &[(&str, &str)] = &[
    ("london", "UK"),
    ("paris", "France"),
    ("madrid", "Spain"),
    ("barcelona", "Spain"),
    ("rome", "Italy"),
    ("venice", "Italy"),
    ("florence", "Italy"),
    ("dublin", "Ireland"),
    ("edinburgh", "Scotland"),
    ("glasgow", "Scotland"),
    ("amsterdam", "Netherlands"),
    ("athens", "Greece"),
    ("stockholm", "Sweden"),
    ("moscow", "Russia"),
    ("st petersburg", "Russia"),
    ("new york", "USA"),
    ("los angeles", "USA"),
    ("las vegas", "USA"),
    ("sydney", "Australia"),
    ("melbourne", "Australia"),
    ("tokyo", "Japan"),
    ("osaka", "Japan"),
    ("kyoto", "Japan"),
    ("mumbai", "India"),
    ("delhi", "India"),
    ("bangalore", "India"),
    ("bangkok", "Thailand"),
    ("phuket", "Thailand"),
    ("berlin", "Germany"),
    ("munich", "Germany"),
    ("rio", "Brazil"),
    ("sao paulo", "Brazil"),
    ("cancun", "Mexico"),
    ("mexico city", "Mexico"),
];

pub static COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("england", "UK"),
    ("britain", "UK"),
    ("great britain", "UK"),
    ("united kingdom", "UK"),
    ("uk", "UK"),
    ("usa", "USA"),
    ("united states", "USA"),
    ("america", "USA"),
    ("us", "USA"),
    ("holland", "Netherlands"),
    ("russia", "Russia"),
    ("russian federation", "Russia"),
];

// =============================================================================
// Monthly travel tips (lowercase month keys)
// =============================================================================

pub static WEATHER_TIPS: &[(&str, &str)] = &[
    ("january", "Cold in the northern hemisphere, pack warm layers; summer heat down under"),
    ("february", "Still cold in Europe and Asia, carnival season is warm in Brazil"),
    ("march", "Mild spring weather, pack layers for cool evenings"),
    ("april", "Spring showers are common, bring a light rain jacket"),
    ("may", "Pleasant and warm in most of Europe, ideal sightseeing weather"),
    ("june", "Long daylight hours and warm days, pack sunscreen"),
    ("july", "Peak summer: hot and humid in many places, stay hydrated"),
    ("august", "Hot summer weather, expect afternoon storms in the tropics"),
    ("september", "Warm days and cooler nights as summer winds down"),
    ("october", "Crisp autumn weather, pack a warm jacket"),
    ("november", "Cool and often rainy, dress in waterproof layers"),
    ("december", "Cold and festive in the north, pack winter clothing"),
];

pub static TRAVEL_TIPS: &[(&str, &str)] = &[
    ("january", "Post-holiday lull brings lower prices on flights and hotels"),
    ("february", "Book carnival accommodation early, it sells out fast"),
    ("march", "Shoulder season offers good deals before the spring rush"),
    ("april", "Easter holidays raise prices, plan around school breaks"),
    ("may", "Great month for value before peak summer pricing"),
    ("june", "Festival season starts, reserve popular events ahead"),
    ("july", "Peak travel season: book flights and hotels well in advance"),
    ("august", "Europe is crowded as locals holiday, expect busy attractions"),
    ("september", "Crowds thin out after summer, good time for deals"),
    ("october", "Autumn foliage and harvest festivals, moderate crowds"),
    ("november", "Low season in most places, look for bargain packages"),
    ("december", "Holiday markets are busy, book festive stays early"),
];
