/// Accounts seeded on the backend. Index 0 is never addressed by the word scenarios.
pub const USERS: [&str; 84] = [
    "apple",
    "banana",
    "orange",
    "mango",
    "pear",
    "strawberry",
    "pineapple",
    "avocado",
    "kiwi",
    "peach",
    "plum",
    "pomegranate",
    "guava",
    "cantaloupe",
    "honeydew",
    "watermelon",
    "tomato",
    "potato",
    "onion",
    "garlic",
    "ginger",
    "carrot",
    "celery",
    "cucumber",
    "bellpepper",
    "eggplant",
    "squash",
    "zucchini",
    "lettuce",
    "arugula",
    "broccoli",
    "cauliflower",
    "cabbage",
    "kale",
    "collardgreens",
    "brussels",
    "bokchoy",
    "spinach",
    "mustardgreens",
    "chard",
    "tangerine",
    "lime",
    "lemon",
    "grapefruit",
    "pomelo",
    "mandarin",
    "tangelo",
    "clementine",
    "satsuma",
    "uglifruit",
    "papaya",
    "mangosteen",
    "durian",
    "jackfruit",
    "lychee",
    "longan",
    "rambutan",
    "persimmon",
    "kiwifruit",
    "starfruit",
    "coconut",
    "date",
    "fig",
    "pricklypear",
    "olive",
    "cactusfruit",
    "grapes",
    "raisin",
    "sultana",
    "currant",
    "rowanberry",
    "gooseberry",
    "elderberry",
    "huckleberry",
    "boysenberry",
    "cloudberry",
    "bakeberry",
    "raspberry",
    "blackberry",
    "bilberry",
    "whortleberry",
    "barberry",
    "cranberry",
    "lingonberry",
];
