//! Static display strings for every supported language.
//!
//! Every record is a plain struct literal: a missing field or a wrong number
//! of tips/examples is a compile error, not a runtime fallback.

/// Number of tips every language provides.
pub const TIP_COUNT: usize = 5;

/// Number of worked examples every language provides.
pub const EXAMPLE_COUNT: usize = 2;

/// A titled block of copy (one tip or one example).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub title: &'static str,
    pub description: &'static str,
}

/// Interface labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLabels {
    pub tips_heading: &'static str,
    pub examples_heading: &'static str,
    pub search_label: &'static str,
    pub search_placeholder: &'static str,
    pub no_results: &'static str,
    /// Follows the number of visible items, e.g. "7 results".
    pub results_suffix: &'static str,
    pub clear_search: &'static str,
    pub listen: &'static str,
    pub share: &'static str,
    pub export: &'static str,
    pub copied: &'static str,
    pub share_failed: &'static str,
    pub export_failed: &'static str,
    pub toggle_theme: &'static str,
    pub font_size: &'static str,
    pub language: &'static str,
    pub scroll_top: &'static str,
    pub cta_heading: &'static str,
    pub cta_body: &'static str,
    pub footer: &'static str,
    pub drop_hint: &'static str,
}

/// The complete set of display strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationRecord {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub hero_title: &'static str,
    pub hero_desc: &'static str,
    pub cta: &'static str,
    pub tips: [Entry; TIP_COUNT],
    pub examples: [Entry; EXAMPLE_COUNT],
    pub ui: UiLabels,
}

impl TranslationRecord {
    /// Every string in the record, labelled by field name.
    pub fn fields(&self) -> Vec<(&'static str, &'static str)> {
        let ui = &self.ui;
        let mut fields = vec![
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("hero_title", self.hero_title),
            ("hero_desc", self.hero_desc),
            ("cta", self.cta),
            ("ui.tips_heading", ui.tips_heading),
            ("ui.examples_heading", ui.examples_heading),
            ("ui.search_label", ui.search_label),
            ("ui.search_placeholder", ui.search_placeholder),
            ("ui.no_results", ui.no_results),
            ("ui.results_suffix", ui.results_suffix),
            ("ui.clear_search", ui.clear_search),
            ("ui.listen", ui.listen),
            ("ui.share", ui.share),
            ("ui.export", ui.export),
            ("ui.copied", ui.copied),
            ("ui.share_failed", ui.share_failed),
            ("ui.export_failed", ui.export_failed),
            ("ui.toggle_theme", ui.toggle_theme),
            ("ui.font_size", ui.font_size),
            ("ui.language", ui.language),
            ("ui.scroll_top", ui.scroll_top),
            ("ui.cta_heading", ui.cta_heading),
            ("ui.cta_body", ui.cta_body),
            ("ui.footer", ui.footer),
            ("ui.drop_hint", ui.drop_hint),
        ];
        for entry in self.tips.iter().chain(self.examples.iter()) {
            fields.push(("entry.title", entry.title));
            fields.push(("entry.description", entry.description));
        }
        fields
    }
}

pub static EN: TranslationRecord = TranslationRecord {
    title: "StoryMaster",
    subtitle: "Your storytelling coach",
    hero_title: "Tell stories people remember",
    hero_desc: "Practical techniques and worked examples that turn any talk, pitch or bedtime tale into a story your audience cannot forget.",
    cta: "Start telling",
    tips: [
        Entry {
            title: "Start with a hook",
            description: "Open with a question, a surprise or a vivid moment that makes listeners lean in.",
        },
        Entry {
            title: "Show, don't tell",
            description: "Let actions, dialogue and small details reveal feelings instead of naming them.",
        },
        Entry {
            title: "Give your hero a goal",
            description: "A character who wants something drives the story forward and keeps attention.",
        },
        Entry {
            title: "Build tension",
            description: "Add obstacles and raise the stakes before you offer any relief.",
        },
        Entry {
            title: "End with meaning",
            description: "Close with a clear takeaway your audience will carry home.",
        },
    ],
    examples: [
        Entry {
            title: "The lost key",
            description: "A child searches the whole house for a lost key, only to find it in her pocket: a short tale about patience.",
        },
        Entry {
            title: "The mountain pitch",
            description: "A founder opens her product pitch with the night she got lost on a mountain, then reveals how it inspired the app.",
        },
    ],
    ui: UiLabels {
        tips_heading: "Storytelling tips",
        examples_heading: "Worked examples",
        search_label: "Search tips and examples",
        search_placeholder: "Search tips and examples...",
        no_results: "No tips or examples match your search.",
        results_suffix: "results",
        clear_search: "Clear",
        listen: "Listen",
        share: "Share",
        export: "Export",
        copied: "Copied to clipboard",
        share_failed: "Sharing is not available right now",
        export_failed: "Export failed",
        toggle_theme: "Toggle theme",
        font_size: "Font size",
        language: "Language",
        scroll_top: "Back to top",
        cta_heading: "Ready to tell your story?",
        cta_body: "Pick one tip, try it tonight, and watch your listeners lean in.",
        footer: "StoryMaster. Every voice has a story.",
        drop_hint: "Drop text here to search",
    },
};

pub static HE: TranslationRecord = TranslationRecord {
    title: "StoryMaster",
    subtitle: "מאמן הסיפור שלך",
    hero_title: "ספרו סיפורים שזוכרים",
    hero_desc: "טכניקות מעשיות ודוגמאות מלאות שהופכות כל הרצאה, הצגה או סיפור לפני השינה לסיפור שהקהל לא ישכח.",
    cta: "התחילו לספר",
    tips: [
        Entry {
            title: "פתחו בפתיח מושך",
            description: "פתחו בשאלה, בהפתעה או ברגע חי שגורם למאזינים להתקרב.",
        },
        Entry {
            title: "הראו, אל תספרו",
            description: "תנו לפעולות, לדיאלוג ולפרטים קטנים לחשוף רגשות במקום לקרוא להם בשם.",
        },
        Entry {
            title: "תנו לגיבור מטרה",
            description: "דמות שרוצה משהו מניעה את הסיפור קדימה ושומרת על תשומת הלב.",
        },
        Entry {
            title: "בנו מתח",
            description: "הוסיפו מכשולים והעלו את הסיכון לפני שאתם מציעים הקלה.",
        },
        Entry {
            title: "סיימו עם משמעות",
            description: "סגרו עם מסר ברור שהקהל ייקח איתו הביתה.",
        },
    ],
    examples: [
        Entry {
            title: "המפתח האבוד",
            description: "ילדה מחפשת בכל הבית מפתח אבוד ומגלה שהוא היה בכיס שלה: סיפור קצר על סבלנות.",
        },
        Entry {
            title: "הצגת ההר",
            description: "יזמת פותחת את הצגת המוצר בלילה שבו הלכה לאיבוד בהר, ואז מגלה איך הוא הוליד את האפליקציה.",
        },
    ],
    ui: UiLabels {
        tips_heading: "טיפים לסיפור",
        examples_heading: "דוגמאות מלאות",
        search_label: "חיפוש טיפים ודוגמאות",
        search_placeholder: "חפשו טיפים ודוגמאות...",
        no_results: "אין טיפים או דוגמאות שתואמים לחיפוש.",
        results_suffix: "תוצאות",
        clear_search: "ניקוי",
        listen: "האזנה",
        share: "שיתוף",
        export: "ייצוא",
        copied: "הועתק ללוח",
        share_failed: "השיתוף אינו זמין כרגע",
        export_failed: "הייצוא נכשל",
        toggle_theme: "החלפת ערכת נושא",
        font_size: "גודל גופן",
        language: "שפה",
        scroll_top: "חזרה למעלה",
        cta_heading: "מוכנים לספר את הסיפור שלכם?",
        cta_body: "בחרו טיפ אחד, נסו אותו הערב, וראו איך המאזינים מתקרבים.",
        footer: "StoryMaster. לכל קול יש סיפור.",
        drop_hint: "גררו טקסט לכאן כדי לחפש",
    },
};

pub static ZH: TranslationRecord = TranslationRecord {
    title: "StoryMaster",
    subtitle: "你的讲故事教练",
    hero_title: "讲出让人记住的故事",
    hero_desc: "实用技巧与完整示例，让每一次演讲、路演或睡前故事都成为听众难忘的故事。",
    cta: "开始讲述",
    tips: [
        Entry {
            title: "用钩子开场",
            description: "以一个问题、一个惊喜或一个生动的瞬间开场，让听众身体前倾。",
        },
        Entry {
            title: "展示，而不是告诉",
            description: "让动作、对话和细节流露情感，而不是直接说出情感。",
        },
        Entry {
            title: "给主角一个目标",
            description: "一个有所渴望的角色会推动故事前进并抓住注意力。",
        },
        Entry {
            title: "制造张力",
            description: "在给出缓解之前，先设置障碍并提高赌注。",
        },
        Entry {
            title: "以意义收尾",
            description: "用一个清晰的收获结束，让听众带回家。",
        },
    ],
    examples: [
        Entry {
            title: "丢失的钥匙",
            description: "一个孩子把整个房子翻遍寻找丢失的钥匙，最后发现它就在自己口袋里：一个关于耐心的小故事。",
        },
        Entry {
            title: "山间路演",
            description: "一位创始人用她在山里迷路的那个夜晚开场，然后揭示那一刻如何启发了这款应用。",
        },
    ],
    ui: UiLabels {
        tips_heading: "讲故事技巧",
        examples_heading: "完整示例",
        search_label: "搜索技巧和示例",
        search_placeholder: "搜索技巧和示例……",
        no_results: "没有与搜索匹配的技巧或示例。",
        results_suffix: "条结果",
        clear_search: "清除",
        listen: "收听",
        share: "分享",
        export: "导出",
        copied: "已复制到剪贴板",
        share_failed: "暂时无法分享",
        export_failed: "导出失败",
        toggle_theme: "切换主题",
        font_size: "字号",
        language: "语言",
        scroll_top: "回到顶部",
        cta_heading: "准备好讲述你的故事了吗？",
        cta_body: "挑选一个技巧，今晚就试试，看听众如何被吸引。",
        footer: "StoryMaster。每个声音都有一个故事。",
        drop_hint: "将文字拖到这里进行搜索",
    },
};

pub static HI: TranslationRecord = TranslationRecord {
    title: "StoryMaster",
    subtitle: "आपका कहानी कोच",
    hero_title: "ऐसी कहानियाँ सुनाएँ जो याद रहें",
    hero_desc: "व्यावहारिक तकनीकें और पूरे उदाहरण जो हर भाषण, पिच या सोने से पहले की कहानी को अविस्मरणीय बना देते हैं।",
    cta: "सुनाना शुरू करें",
    tips: [
        Entry {
            title: "एक हुक से शुरू करें",
            description: "किसी सवाल, आश्चर्य या जीवंत पल से शुरुआत करें जो श्रोताओं को आगे झुका दे।",
        },
        Entry {
            title: "बताएँ नहीं, दिखाएँ",
            description: "भावनाओं का नाम लेने के बजाय क्रियाओं, संवाद और छोटे विवरणों से उन्हें प्रकट होने दें।",
        },
        Entry {
            title: "नायक को एक लक्ष्य दें",
            description: "जो पात्र कुछ चाहता है, वह कहानी को आगे बढ़ाता है और ध्यान बनाए रखता है।",
        },
        Entry {
            title: "तनाव बनाएँ",
            description: "राहत देने से पहले बाधाएँ जोड़ें और दांव ऊँचे करें।",
        },
        Entry {
            title: "अर्थ के साथ समाप्त करें",
            description: "एक स्पष्ट सीख के साथ समाप्त करें जिसे श्रोता घर ले जाएँ।",
        },
    ],
    examples: [
        Entry {
            title: "खोई हुई चाबी",
            description: "एक बच्ची पूरे घर में खोई चाबी ढूँढती है और आखिर में उसे अपनी जेब में पाती है: धैर्य की एक छोटी कहानी।",
        },
        Entry {
            title: "पहाड़ वाली पिच",
            description: "एक संस्थापक अपनी पिच उस रात से शुरू करती है जब वह पहाड़ पर भटक गई थी, फिर बताती है कि उसी से ऐप का विचार आया।",
        },
    ],
    ui: UiLabels {
        tips_heading: "कहानी कहने के सुझाव",
        examples_heading: "पूरे उदाहरण",
        search_label: "सुझाव और उदाहरण खोजें",
        search_placeholder: "सुझाव और उदाहरण खोजें...",
        no_results: "आपकी खोज से कोई सुझाव या उदाहरण मेल नहीं खाता।",
        results_suffix: "परिणाम",
        clear_search: "साफ़ करें",
        listen: "सुनें",
        share: "साझा करें",
        export: "निर्यात करें",
        copied: "क्लिपबोर्ड पर कॉपी किया गया",
        share_failed: "अभी साझा करना उपलब्ध नहीं है",
        export_failed: "निर्यात विफल रहा",
        toggle_theme: "थीम बदलें",
        font_size: "फ़ॉन्ट आकार",
        language: "भाषा",
        scroll_top: "ऊपर जाएँ",
        cta_heading: "क्या आप अपनी कहानी सुनाने के लिए तैयार हैं?",
        cta_body: "एक सुझाव चुनें, आज रात आज़माएँ, और देखें कैसे श्रोता जुड़ते हैं।",
        footer: "StoryMaster. हर आवाज़ की एक कहानी है।",
        drop_hint: "खोजने के लिए टेक्स्ट यहाँ छोड़ें",
    },
};

pub static DE: TranslationRecord = TranslationRecord {
    title: "StoryMaster",
    subtitle: "Dein Coach fürs Geschichtenerzählen",
    hero_title: "Erzähle Geschichten, die bleiben",
    hero_desc: "Praktische Techniken und ausgearbeitete Beispiele, die jeden Vortrag, jeden Pitch und jede Gutenachtgeschichte unvergesslich machen.",
    cta: "Jetzt erzählen",
    tips: [
        Entry {
            title: "Beginne mit einem Aufhänger",
            description: "Starte mit einer Frage, einer Überraschung oder einem lebendigen Moment, der die Zuhörer fesselt.",
        },
        Entry {
            title: "Zeigen statt erzählen",
            description: "Lass Handlungen, Dialoge und kleine Details Gefühle zeigen, statt sie zu benennen.",
        },
        Entry {
            title: "Gib deiner Heldin ein Ziel",
            description: "Eine Figur, die etwas will, treibt die Geschichte voran und hält die Aufmerksamkeit.",
        },
        Entry {
            title: "Baue Spannung auf",
            description: "Füge Hindernisse hinzu und erhöhe den Einsatz, bevor du Erleichterung bietest.",
        },
        Entry {
            title: "Ende mit Bedeutung",
            description: "Schließe mit einer klaren Botschaft, die dein Publikum mit nach Hause nimmt.",
        },
    ],
    examples: [
        Entry {
            title: "Der verlorene Schlüssel",
            description: "Ein Kind durchsucht das ganze Haus nach einem verlorenen Schlüssel und findet ihn in der eigenen Tasche: eine kurze Geschichte über Geduld.",
        },
        Entry {
            title: "Der Berg-Pitch",
            description: "Eine Gründerin beginnt ihren Pitch mit der Nacht, in der sie sich am Berg verirrte, und zeigt dann, wie daraus die App entstand.",
        },
    ],
    ui: UiLabels {
        tips_heading: "Tipps zum Erzählen",
        examples_heading: "Ausgearbeitete Beispiele",
        search_label: "Tipps und Beispiele durchsuchen",
        search_placeholder: "Tipps und Beispiele durchsuchen...",
        no_results: "Keine Tipps oder Beispiele passen zu deiner Suche.",
        results_suffix: "Ergebnisse",
        clear_search: "Leeren",
        listen: "Anhören",
        share: "Teilen",
        export: "Exportieren",
        copied: "In die Zwischenablage kopiert",
        share_failed: "Teilen ist gerade nicht möglich",
        export_failed: "Export fehlgeschlagen",
        toggle_theme: "Design wechseln",
        font_size: "Schriftgröße",
        language: "Sprache",
        scroll_top: "Nach oben",
        cta_heading: "Bereit, deine Geschichte zu erzählen?",
        cta_body: "Wähle einen Tipp, probiere ihn heute Abend aus und sieh, wie dein Publikum mitgeht.",
        footer: "StoryMaster. Jede Stimme hat eine Geschichte.",
        drop_hint: "Text hierher ziehen, um zu suchen",
    },
};

pub static ES: TranslationRecord = TranslationRecord {
    title: "StoryMaster",
    subtitle: "Tu entrenador de narración",
    hero_title: "Cuenta historias que se recuerdan",
    hero_desc: "Técnicas prácticas y ejemplos completos que convierten cualquier charla, presentación o cuento para dormir en una historia inolvidable.",
    cta: "Empieza a contar",
    tips: [
        Entry {
            title: "Empieza con un gancho",
            description: "Abre con una pregunta, una sorpresa o un momento vívido que haga que el público se incline hacia ti.",
        },
        Entry {
            title: "Muestra, no cuentes",
            description: "Deja que las acciones, el diálogo y los pequeños detalles revelen los sentimientos en lugar de nombrarlos.",
        },
        Entry {
            title: "Dale una meta a tu protagonista",
            description: "Un personaje que desea algo impulsa la historia y mantiene la atención.",
        },
        Entry {
            title: "Crea tensión",
            description: "Añade obstáculos y sube lo que está en juego antes de ofrecer alivio.",
        },
        Entry {
            title: "Termina con sentido",
            description: "Cierra con una enseñanza clara que tu público se lleve a casa.",
        },
    ],
    examples: [
        Entry {
            title: "La llave perdida",
            description: "Una niña busca por toda la casa una llave perdida y al final la encuentra en su bolsillo: un cuento breve sobre la paciencia.",
        },
        Entry {
            title: "La presentación de la montaña",
            description: "Una fundadora abre su presentación con la noche en que se perdió en una montaña y revela cómo eso inspiró la aplicación.",
        },
    ],
    ui: UiLabels {
        tips_heading: "Consejos de narración",
        examples_heading: "Ejemplos completos",
        search_label: "Buscar consejos y ejemplos",
        search_placeholder: "Buscar consejos y ejemplos...",
        no_results: "Ningún consejo o ejemplo coincide con tu búsqueda.",
        results_suffix: "resultados",
        clear_search: "Borrar",
        listen: "Escuchar",
        share: "Compartir",
        export: "Exportar",
        copied: "Copiado al portapapeles",
        share_failed: "No se puede compartir en este momento",
        export_failed: "La exportación falló",
        toggle_theme: "Cambiar tema",
        font_size: "Tamaño de letra",
        language: "Idioma",
        scroll_top: "Volver arriba",
        cta_heading: "¿Listo para contar tu historia?",
        cta_body: "Elige un consejo, pruébalo esta noche y observa cómo tu público se engancha.",
        footer: "StoryMaster. Cada voz tiene una historia.",
        drop_hint: "Suelta texto aquí para buscar",
    },
};

pub static FR: TranslationRecord = TranslationRecord {
    title: "StoryMaster",
    subtitle: "Votre coach en narration",
    hero_title: "Racontez des histoires qui marquent",
    hero_desc: "Des techniques pratiques et des exemples détaillés qui transforment chaque discours, pitch ou histoire du soir en un récit inoubliable.",
    cta: "Commencer à raconter",
    tips: [
        Entry {
            title: "Commencez par une accroche",
            description: "Ouvrez avec une question, une surprise ou un moment vivant qui captive l'auditoire.",
        },
        Entry {
            title: "Montrez, ne dites pas",
            description: "Laissez les actions, les dialogues et les petits détails révéler les émotions au lieu de les nommer.",
        },
        Entry {
            title: "Donnez un but à votre héros",
            description: "Un personnage qui désire quelque chose fait avancer l'histoire et retient l'attention.",
        },
        Entry {
            title: "Créez de la tension",
            description: "Ajoutez des obstacles et augmentez les enjeux avant d'offrir un soulagement.",
        },
        Entry {
            title: "Terminez avec du sens",
            description: "Concluez par un message clair que votre public emportera avec lui.",
        },
    ],
    examples: [
        Entry {
            title: "La clé perdue",
            description: "Une enfant fouille toute la maison à la recherche d'une clé perdue et la retrouve dans sa poche : un court récit sur la patience.",
        },
        Entry {
            title: "Le pitch de la montagne",
            description: "Une fondatrice ouvre son pitch avec la nuit où elle s'est perdue en montagne, puis révèle comment ce moment a inspiré l'application.",
        },
    ],
    ui: UiLabels {
        tips_heading: "Conseils de narration",
        examples_heading: "Exemples détaillés",
        search_label: "Rechercher des conseils et des exemples",
        search_placeholder: "Rechercher des conseils et des exemples...",
        no_results: "Aucun conseil ni exemple ne correspond à votre recherche.",
        results_suffix: "résultats",
        clear_search: "Effacer",
        listen: "Écouter",
        share: "Partager",
        export: "Exporter",
        copied: "Copié dans le presse-papiers",
        share_failed: "Le partage n'est pas disponible pour le moment",
        export_failed: "L'exportation a échoué",
        toggle_theme: "Changer de thème",
        font_size: "Taille du texte",
        language: "Langue",
        scroll_top: "Retour en haut",
        cta_heading: "Prêt à raconter votre histoire ?",
        cta_body: "Choisissez un conseil, essayez-le ce soir et voyez votre public s'animer.",
        footer: "StoryMaster. Chaque voix a une histoire.",
        drop_hint: "Déposez du texte ici pour rechercher",
    },
};
