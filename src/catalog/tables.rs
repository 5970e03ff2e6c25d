//! Built-in source and prompt tables, one entry per category

use crate::models::Category;

/// Primary image URLs served round-robin by the direct tier
pub fn direct_urls(category: Category) -> &'static [&'static str] {
    match category {
        Category::Angry => ANGRY_URLS,
        Category::Disgust => DISGUST_URLS,
        Category::Fear => FEAR_URLS,
        Category::Happy => HAPPY_URLS,
        Category::Neutral => NEUTRAL_URLS,
        Category::Sad => SAD_URLS,
        Category::Surprise => SURPRISE_URLS,
    }
}

/// Search terms fed to the generative fallback
pub fn prompts(category: Category) -> &'static [&'static str] {
    match category {
        Category::Angry => ANGRY_PROMPTS,
        Category::Disgust => DISGUST_PROMPTS,
        Category::Fear => FEAR_PROMPTS,
        Category::Happy => HAPPY_PROMPTS,
        Category::Neutral => NEUTRAL_PROMPTS,
        Category::Sad => SAD_PROMPTS,
        Category::Surprise => SURPRISE_PROMPTS,
    }
}

const ANGRY_URLS: &[&str] = &[
    "https://images.unsplash.com/photo-1549485090-40cf220f4a8f?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1605727216801-e27ce1d0cc28?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1462275646964-a0e3f8a8d34e?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1516912481808-3406841bd33c?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1527482797697-8795b05a13fe?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1475776408506-9a5371e7d6e0?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1519659528534-7fd733a832a0?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1508739773434-c26b3d09e071?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1576085898323-218337e3e43c?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1429552054477-ead6b43a8f6c?w=1920&h=1080&fit=crop",
];

const DISGUST_URLS: &[&str] = &[
    "https://images.unsplash.com/photo-1507400492013-162706c8c05e?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1534088568595-a066f410bcda?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1485470733090-0aae1788d5af?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1518241353330-0f7941c2d9b5?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1494548162494-384bba4ab999?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1489549132488-d00b7eee80f1?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1517483000871-1dbf64a6e1c6?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1475274047050-1d0c0975c63e?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1504253163759-c23fccaebb55?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1478760329108-5c3ed9d495a0?w=1920&h=1080&fit=crop",
];

const FEAR_URLS: &[&str] = &[
    "https://images.unsplash.com/photo-1518241353330-0f7941c2d9b5?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1478760329108-5c3ed9d495a0?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1509248961895-40e912104a1e?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1505142468610-359e7d316be0?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1461696114087-397271a7aedc?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1516410529446-2c777cb7366d?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1534447677768-be436bb09401?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1528722828814-77b9b83aafb2?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1500534623283-312aade485b7?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1503435824048-a799a3a84bf7?w=1920&h=1080&fit=crop",
];

const HAPPY_URLS: &[&str] = &[
    "https://images.unsplash.com/photo-1490750967868-88aa4486c946?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1518173946687-a4c036bc3c4a?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1501785888041-af3ef285b470?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1470252649378-9c29740c9fa8?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1475924156734-496f6cac6ec1?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1433086966358-54859d0ed716?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1501854140801-50d01698950b?w=1920&h=1080&fit=crop",
];

const NEUTRAL_URLS: &[&str] = &[
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1433086966358-54859d0ed716?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1501785888041-af3ef285b470?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1470252649378-9c29740c9fa8?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1475924156734-496f6cac6ec1?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1501854140801-50d01698950b?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1518495973542-4542c06a5843?w=1920&h=1080&fit=crop",
];

const SAD_URLS: &[&str] = &[
    "https://images.unsplash.com/photo-1515694346937-94d85e41e6f0?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1428908728789-d2de25dbd4e2?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1485236715568-ddc5ee6ca227?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1499956827185-0d63ee78a910?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1534088568595-a066f410bcda?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1468276311594-df7cb65d8df6?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1501426026826-31c667bdf23d?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1516912481808-3406841bd33c?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1478827387698-1527781a4887?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1527766833261-b09c3163a791?w=1920&h=1080&fit=crop",
];

const SURPRISE_URLS: &[&str] = &[
    "https://images.unsplash.com/photo-1467810563316-b5476525c0f9?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1531366936337-7c912a4589a7?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1444703686981-a3abbc4d4fe3?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1506318137071-a8e063b4bec0?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1464802686167-b939a6910659?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1516339901601-2e1b62dc0c45?w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1507400492013-162706c8c05e?w=1920&h=1080&fit=crop",
];

const ANGRY_PROMPTS: &[&str] = &[
    "volcanic eruption lava",
    "lightning storm dramatic",
    "red sky dramatic clouds",
    "stormy ocean waves",
    "fire flames abstract",
    "crimson sunset intense",
    "dark thundercloud",
    "tornado storm dramatic",
    "burning embers fire",
    "blood moon eclipse",
    "intense red canyon",
    "wildfire dramatic",
    "stormy desert dust",
    "dramatic red sunset",
    "power lightning bolt",
    "raging waterfall mist",
    "fierce ocean storm",
    "red hot lava flow",
    "intense thunderstorm",
    "fiery sky dramatic",
];

const DISGUST_PROMPTS: &[&str] = &[
    "dark swamp murky",
    "abstract distortion art",
    "gloomy industrial decay",
    "murky water texture",
    "abandoned factory dark",
    "decaying nature abstract",
    "dark mossy rocks",
    "gritty urban texture",
    "oxidized metal rust",
    "dark abstract chaos",
    "muddy water stream",
    "grimy texture abstract",
    "decomposing leaves dark",
    "moldy surface macro",
    "dark sludge abstract",
    "polluted sky smog",
    "murky pond surface",
    "cracked earth drought",
    "dark seaweed underwater",
    "abstract dark texture",
];

const FEAR_PROMPTS: &[&str] = &[
    "dark forest fog",
    "misty path mysterious",
    "abandoned building dark",
    "deep ocean abyss",
    "haunted forest night",
    "dark tunnel light",
    "eerie moonlight shadows",
    "mysterious cave entrance",
    "foggy graveyard night",
    "dark stormy sea",
    "creepy forest path",
    "shadowy mountain peaks",
    "ominous clouds dark",
    "ancient ruins night",
    "deep forest darkness",
    "mysterious fog swamp",
    "dark castle silhouette",
    "nightmare landscape dark",
    "spooky forest mist",
    "dark canyon depths",
];

const HAPPY_PROMPTS: &[&str] = &[
    "golden sunrise mountains",
    "sunflower field summer",
    "rainbow sky clouds",
    "tropical beach paradise",
    "cherry blossom spring",
    "hot air balloons colorful",
    "golden wheat field sunset",
    "butterfly garden flowers",
    "coral reef underwater",
    "lavender field provence",
    "autumn leaves golden",
    "hummingbird flowers",
    "colorful tulips garden",
    "northern lights aurora",
    "majestic waterfall rainbow",
    "spring meadow wildflowers",
    "tropical sunset ocean",
    "golden hour landscape",
    "vibrant coral reef fish",
    "sakura trees japan",
];

const NEUTRAL_PROMPTS: &[&str] = &[
    "zen garden minimalist",
    "calm water ripples",
    "soft gradient sky",
    "geometric minimal pattern",
    "serene mountain reflection",
    "neutral tone abstract",
    "simple horizon line",
    "clean marble texture",
    "peaceful lake morning",
    "subtle cloud formations",
    "minimal architecture",
    "soft sand dunes",
    "gentle ocean horizon",
    "quiet forest path",
    "balanced stone stack",
    "simple nature pattern",
    "clean modern interior",
    "soft pastel abstract",
    "tranquil river flow",
    "minimalist mountain",
];

const SAD_PROMPTS: &[&str] = &[
    "rain window drops",
    "foggy pier morning",
    "lonely tree winter",
    "misty mountain lake",
    "empty bench rain",
    "blue hour cityscape",
    "melancholic ocean waves",
    "gray cloudy sky",
    "abandoned railway tracks",
    "silent snow forest",
    "twilight blue mountains",
    "reflective still water",
    "moody coastal cliffs",
    "winter bare trees",
    "fog rolling hills",
    "rainy cobblestone street",
    "overcast seascape",
    "solitary lighthouse storm",
    "dusk empty beach",
    "mysterious blue forest",
];

const SURPRISE_PROMPTS: &[&str] = &[
    "galaxy space nebula",
    "fireworks celebration night",
    "aurora borealis vivid",
    "prismatic crystals colorful",
    "cosmic explosion stars",
    "neon city lights",
    "electric lightning purple",
    "magical forest glow",
    "bioluminescent ocean",
    "starfield milky way",
    "colorful smoke abstract",
    "vibrant supernova",
    "psychedelic abstract colors",
    "glowing mushrooms forest",
    "meteor shower night",
    "holographic abstract",
    "diamond sparkle macro",
    "burst light rays",
    "colorful paint splash",
    "firework explosion bright",
];
