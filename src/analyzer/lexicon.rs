use crate::model::{Category, Tier};

/// Keyword tiers of one scored category.
#[derive(Debug)]
pub struct CategoryDefinition {
    pub category: Category,
    pub tiers: [(Tier, &'static [&'static str]); 3],
}

pub static DEFINITIONS: [CategoryDefinition; 6] = [
    CategoryDefinition {
        category: Category::ComputerHardware,
        tiers: [
            (
                Tier::High,
                &[
                    "computer", "laptop", "desktop", "server", "workstation", "tablet", "pc",
                    "cpu", "processor", "motherboard", "ram", "memory", "hard drive", "ssd",
                    "hdd", "graphics card", "gpu", "video card", "monitor", "display",
                    "keyboard", "mouse", "printer", "scanner", "router", "switch",
                    "network adapter", "usb", "ethernet", "wireless", "bluetooth", "webcam",
                    "speaker", "headphone", "microphone", "toner", "cartridge", "ink",
                    "printer paper", "laser", "inkjet", "multifunction",
                ],
            ),
            (
                Tier::Medium,
                &[
                    "hardware", "component", "peripheral", "accessory", "cable", "connector",
                    "adapter", "dock", "charger", "battery", "power supply", "ups", "copier",
                    "fax", "document", "imaging",
                ],
            ),
            (
                Tier::Low,
                &[
                    "electronic", "digital", "tech", "it equipment", "computing",
                    "office equipment",
                ],
            ),
        ],
    },
    CategoryDefinition {
        category: Category::ItServices,
        tiers: [
            (
                Tier::High,
                &[
                    "software", "license", "subscription", "cloud", "saas", "paas", "iaas",
                    "support", "maintenance", "consulting", "implementation", "integration",
                    "training", "certification", "managed services", "hosting", "backup",
                    "security", "firewall", "antivirus", "vpn", "encryption", "authentication",
                ],
            ),
            (
                Tier::Medium,
                &[
                    "service", "solution", "platform", "system", "application", "api",
                    "database", "server management", "network management", "it support",
                ],
            ),
            (
                Tier::Low,
                &[
                    "technology", "it", "information technology", "digital transformation",
                ],
            ),
        ],
    },
    CategoryDefinition {
        category: Category::OfficeSupplies,
        tiers: [
            (
                Tier::High,
                &[
                    "paper", "notebook", "folder", "binder", "envelope", "stamp", "label", "pen",
                    "pencil", "marker", "highlighter", "stapler", "staples", "clip",
                    "rubber band", "tape", "glue", "scissors", "ruler", "calculator",
                    "desk organizer", "file cabinet", "whiteboard", "bulletin board", "calendar",
                    "planner", "notepad", "post-it", "sticky note", "glue stick", "adhesive",
                    "correction", "whiteout", "eraser", "paper clip", "binder clip", "push pin",
                    "thumbtack", "rubber stamp", "envelope", "mailing", "shipping label",
                    "file folder", "hanging folder", "index card", "note card", "greeting card",
                    "stationery", "letterhead", "copy paper", "printer paper", "notebook paper",
                    "graph paper", "legal pad", "bathroom", "washroom", "restroom", "soap",
                    "dispenser", "hand soap", "paper towel", "toilet paper", "tissue", "napkin",
                    "facial tissue", "sanitizer", "hand sanitizer", "purell", "antiseptic",
                    "disinfectant wipes",
                ],
            ),
            (
                Tier::Medium,
                &[
                    "office supply", "stationery", "writing", "filing", "organizer",
                    "desk accessory", "bathroom accessory", "washroom accessory", "hygiene",
                    "personal care", "cleaning supply", "janitorial", "food service",
                    "disposable", "single use", "takeout", "container", "plate", "bowl", "cup",
                    "lid", "utensil", "fork", "knife", "spoon", "platter", "tray", "coffee",
                    "drink", "hot cup", "cold cup",
                ],
            ),
            (
                Tier::Low,
                &[
                    "office", "supply", "business", "workplace", "commercial", "institutional",
                ],
            ),
        ],
    },
    CategoryDefinition {
        category: Category::Industrial,
        tiers: [
            (
                Tier::High,
                &[
                    "industrial", "manufacturing", "machinery", "equipment", "tool",
                    "power tool", "hand tool", "drill", "saw", "wrench", "screwdriver", "hammer",
                    "pliers", "safety", "ppe", "helmet", "gloves", "goggles", "work boot",
                    "safety vest", "hard hat", "welding", "cutting", "fastener", "bolt", "nut",
                    "screw", "nail", "rivet", "adhesive", "lubricant", "grease", "oil", "paint",
                    "coating", "material", "steel", "aluminum", "plastic", "rubber", "fabric",
                    "safety glasses", "safety eyewear", "protective eyewear", "goggles",
                    "coverall", "coveralls", "protective clothing", "ppe", "personal protective",
                    "chemical splash", "particle protection", "liquid protection", "safety shoe",
                    "work boot", "steel toe", "safety boot", "shoe cover", "shoe covers",
                    "boot cover", "boot covers", "sleeve", "sleeves", "arm protection",
                    "protective sleeve", "hard hat", "safety helmet", "bump cap", "safety cap",
                    "safety vest", "reflective vest", "high visibility", "hi-vis", "respirator",
                    "face mask", "dust mask", "n95", "respiratory protection", "ear protection",
                    "earplug", "earmuff", "hearing protection", "cleaning", "cleaner",
                    "degreaser", "floor cleaner", "concrete cleaner", "stripper",
                    "floor stripper", "sealer", "finish", "wax", "mop", "mop head", "broom",
                    "broom head", "sweep", "scrub", "pad", "floor pad", "scrub pad",
                    "stripping pad", "polishing pad", "waste receptacle", "trash can",
                    "garbage can", "receptacle", "container", "lock", "keyed lock", "lock core",
                    "security", "access control", "hook", "garment hook", "coat hook", "hanger",
                    "rack", "tampon dispenser", "sanitary dispenser", "feminine hygiene",
                ],
            ),
            (
                Tier::Medium,
                &[
                    "construction", "maintenance", "repair", "mro", "supply chain", "warehouse",
                    "logistics", "packaging", "shipping", "janitorial", "custodial",
                    "facility maintenance", "building maintenance", "industrial cleaning",
                    "commercial cleaning", "professional cleaning", "safety equipment",
                    "protective equipment", "workplace safety",
                ],
            ),
            (
                Tier::Low,
                &[
                    "industrial", "commercial", "professional", "trade", "maintenance",
                ],
            ),
        ],
    },
    CategoryDefinition {
        category: Category::Furniture,
        tiers: [
            (
                Tier::High,
                &[
                    "furniture", "chair", "desk", "table", "cabinet", "shelf", "bookcase",
                    "sofa", "couch", "armchair", "ottoman", "coffee table", "end table",
                    "dining table", "dining chair", "bed", "mattress", "dresser", "wardrobe",
                    "nightstand", "headboard", "futon", "recliner", "office chair", "ergonomic",
                    "executive", "task chair", "guest chair", "stool", "bench", "counter",
                    "bar stool", "filing cabinet", "storage", "pedestal", "credenza",
                    "workstation", "l-shaped", "u-shaped", "extension", "desk extension",
                    "work surface", "workstation", "seating", "seat", "bath seat", "shower seat",
                    "accessible", "rolling", "platform", "step", "rolling step", "step stool",
                    "bridge", "desk bridge", "monitor bridge", "keyboard tray",
                ],
            ),
            (
                Tier::Medium,
                &[
                    "furnishing", "decor", "accessory", "lamp", "lighting", "rug", "carpet",
                    "curtain", "blind", "shade", "pillow", "cushion", "throw", "blanket",
                    "office furniture", "workplace furniture", "commercial furniture",
                ],
            ),
            (
                Tier::Low,
                &[
                    "furniture", "furnishing", "home", "office furniture", "workplace",
                ],
            ),
        ],
    },
    CategoryDefinition {
        category: Category::Medical,
        tiers: [
            (
                Tier::High,
                &[
                    "medical", "hospital", "clinic", "patient", "diagnostic", "monitor",
                    "stethoscope", "thermometer", "blood pressure", "sphygmomanometer",
                    "defibrillator", "ventilator", "respirator", "oxygen", "suction", "surgical",
                    "scalpel", "forceps", "syringe", "needle", "catheter", "bandage", "gauze",
                    "dressing", "splint", "brace", "crutch", "wheelchair", "walker", "cane",
                    "exam table", "hospital bed", "disposable", "sterile", "sanitizer",
                    "disinfectant", "medical equipment", "hospital equipment",
                    "clinical equipment", "patient care", "medical device",
                    "diagnostic equipment", "surgical instrument", "medical instrument",
                    "therapeutic equipment",
                ],
            ),
            (
                Tier::Medium,
                &[
                    "healthcare", "health care", "medical supply", "hospital supply", "clinical",
                    "therapeutic", "rehabilitation", "therapy", "first aid", "emergency",
                    "ambulance", "medical cart",
                ],
            ),
            (
                Tier::Low,
                &[
                    "medical", "health", "wellness", "care", "hospital", "clinic",
                ],
            ),
        ],
    },
];

/// Looks up the definition of a scored category.
#[cfg(test)]
pub fn definition(category: Category) -> Option<&'static CategoryDefinition> {
    DEFINITIONS.iter().find(|d| d.category == category)
}
