//! The compile-time sample data set the seeder inserts.
//!
//! Recipes reference their author by username and their category by name;
//! both must appear in [`SAMPLE_USERS`] / [`SAMPLE_CATEGORIES`],
//! otherwise seeding aborts with an error.


pub struct SampleUser {
    pub username: &'static str,
    pub display_name: &'static str,
}


pub const SAMPLE_USERS: [SampleUser; 2] = [
    SampleUser {
        username: "ana",
        display_name: "Ana Kovačič",
    },
    SampleUser {
        username: "bojan",
        display_name: "Bojan Oblak",
    },
];


// "Priloge" intentionally has no recipes,
// making its category page respond with 404 Not Found.
pub const SAMPLE_CATEGORIES: [&str; 3] = ["Sladice", "Glavne jedi", "Priloge"];


pub struct SampleRecipe {
    pub title: &'static str,
    pub description: &'static str,
    pub slug: &'static str,
    pub preparation_time: i32,
    pub preparation_time_unit: &'static str,
    pub servings: i32,
    pub servings_unit: &'static str,
    pub preparation_steps: &'static str,
    pub is_published: bool,
    pub author_username: &'static str,
    pub category_name: Option<&'static str>,
}


pub const SAMPLE_RECIPES: [SampleRecipe; 5] = [
    SampleRecipe {
        title: "Klasične palačinke",
        description: "Tanke palačinke po babičinem receptu. Postrezite jih z marelično \
                      marmelado ali čokoladnim namazom.",
        slug: "klasicne-palacinke",
        preparation_time: 45,
        preparation_time_unit: "minut",
        servings: 4,
        servings_unit: "porcije",
        preparation_steps: "Iz moke, mleka, jajc in ščepca soli zmešajte gladko testo.\n\
                            Testo pustite počivati pol ure.\n\
                            Palačinke pecite na vroči, rahlo namaščeni ponvi z obeh strani.",
        is_published: true,
        author_username: "ana",
        category_name: Some("Sladice"),
    },
    SampleRecipe {
        title: "Orehova potica",
        description: "Praznična orehova potica iz kvašenega testa. Priprava zahteva nekaj \
                      potrpljenja, a rezultat je vreden truda.",
        slug: "orehova-potica",
        preparation_time: 180,
        preparation_time_unit: "minut",
        servings: 12,
        servings_unit: "kosov",
        preparation_steps: "Zamesite kvašeno testo in ga pustite vzhajati eno uro.\n\
                            Testo razvaljajte, premažite z orehovim nadevom in tesno zvijte.\n\
                            Potico položite v namaščen model, ponovno vzhajajte in pecite \
                            eno uro pri 170 °C.",
        is_published: true,
        author_username: "bojan",
        category_name: Some("Sladice"),
    },
    SampleRecipe {
        title: "Jota s kislim zeljem",
        description: "Gosta primorska enolončnica s kislim zeljem, fižolom in krompirjem. \
                      Še boljša je pogreta naslednji dan.",
        slug: "jota-s-kislim-zeljem",
        preparation_time: 90,
        preparation_time_unit: "minut",
        servings: 6,
        servings_unit: "porcij",
        preparation_steps: "Fižol skuhajte do mehkega.\n\
                            Na masti prepražite čebulo, dodajte zelje in krompir ter zalijte.\n\
                            Dodajte fižol, začinite in kuhajte še pol ure, da se jota zgosti.",
        is_published: true,
        author_username: "ana",
        category_name: Some("Glavne jedi"),
    },
    SampleRecipe {
        title: "Skutni štruklji",
        description: "Kuhani štruklji s skutnim nadevom. Odlični kot samostojna jed ali kot \
                      priloga k mesnim omakam.",
        slug: "skutni-struklji",
        preparation_time: 60,
        preparation_time_unit: "minut",
        servings: 4,
        servings_unit: "porcije",
        preparation_steps: "Pripravite vlečeno testo in ga tanko razvaljajte.\n\
                            Premažite s skutnim nadevom, zvijte in zavijte v prtič.\n\
                            Štruklje kuhajte pol ure v osoljenem kropu, nato narežite na kose.",
        is_published: false,
        author_username: "bojan",
        category_name: Some("Glavne jedi"),
    },
    SampleRecipe {
        title: "Ajdovi žganci",
        description: "Preprosti ajdovi žganci z ocvirki. Tradicionalno jih postrežemo z \
                      mlekom ali kislim zeljem.",
        slug: "ajdovi-zganci",
        preparation_time: 25,
        preparation_time_unit: "minut",
        servings: 2,
        servings_unit: "porciji",
        preparation_steps: "Ajdovo moko stresite v vrel osoljen krop in kuhajte deset minut.\n\
                            Odlijte del vode, žgance nadrobite in prelijte z ocvirki.",
        is_published: true,
        author_username: "ana",
        category_name: None,
    },
];
