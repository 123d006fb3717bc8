//! Song catalog keyed by normalized mood.

use solace_core::Song;

pub(crate) const MOODS: [&str; 6] = ["happy", "sad", "calm", "energetic", "focused", "relaxed"];

pub(crate) fn songs(mood: &str) -> Vec<Song> {
    let rows: &[(&str, &str, &str)] = match mood {
        "happy" => HAPPY,
        "sad" => SAD,
        "calm" => CALM,
        "energetic" => ENERGETIC,
        "focused" => FOCUSED,
        "relaxed" => RELAXED,
        _ => &[],
    };
    rows.iter()
        .map(|(title, artist, link)| Song {
            title: title.to_string(),
            artist: artist.to_string(),
            link: link.to_string(),
        })
        .collect()
}

const HAPPY: &[(&str, &str, &str)] = &[
    ("Happy", "Pharrell Williams", "https://www.youtube.com/results?search_query=pharrell+williams+happy"),
    ("Can't Stop the Feeling", "Justin Timberlake", "https://www.youtube.com/results?search_query=justin+timberlake+cant+stop+the+feeling"),
    ("Uptown Funk", "Mark Ronson ft. Bruno Mars", "https://www.youtube.com/results?search_query=mark+ronson+uptown+funk"),
    ("Good as Hell", "Lizzo", "https://www.youtube.com/results?search_query=lizzo+good+as+hell"),
    ("Walking on Sunshine", "Katrina & The Waves", "https://www.youtube.com/results?search_query=katrina+and+the+waves+walking+on+sunshine"),
];

const SAD: &[(&str, &str, &str)] = &[
    ("Someone Like You", "Adele", "https://www.youtube.com/results?search_query=adele+someone+like+you"),
    ("Fix You", "Coldplay", "https://www.youtube.com/results?search_query=coldplay+fix+you"),
    ("Hurt", "Johnny Cash", "https://www.youtube.com/results?search_query=johnny+cash+hurt"),
    ("Everybody Hurts", "R.E.M.", "https://www.youtube.com/results?search_query=rem+everybody+hurts"),
    ("Nothing Compares 2 U", "Sinéad O'Connor", "https://www.youtube.com/results?search_query=sinead+oconnor+nothing+compares+2u"),
];

const CALM: &[(&str, &str, &str)] = &[
    ("Weightless", "Marconi Union", "https://www.youtube.com/results?search_query=marconi+union+weightless"),
    ("Claire de Lune", "Claude Debussy", "https://www.youtube.com/results?search_query=debussy+claire+de+lune"),
    ("Gymnopédie No.1", "Erik Satie", "https://www.youtube.com/results?search_query=erik+satie+gymnopedie+no+1"),
    ("Breathe", "Télépopmusik", "https://www.youtube.com/results?search_query=telepopmusik+breathe"),
    ("Porcelain", "Moby", "https://www.youtube.com/results?search_query=moby+porcelain"),
];

const ENERGETIC: &[(&str, &str, &str)] = &[
    ("Eye of the Tiger", "Survivor", "https://www.youtube.com/results?search_query=survivor+eye+of+the+tiger"),
    ("Stronger", "Kanye West", "https://www.youtube.com/results?search_query=kanye+west+stronger"),
    ("Don't Stop Me Now", "Queen", "https://www.youtube.com/results?search_query=queen+dont+stop+me+now"),
    ("Titanium", "David Guetta ft. Sia", "https://www.youtube.com/results?search_query=david+guetta+sia+titanium"),
    ("Till I Collapse", "Eminem", "https://www.youtube.com/results?search_query=eminem+till+i+collapse"),
];

const FOCUSED: &[(&str, &str, &str)] = &[
    ("Experience", "Ludovico Einaudi", "https://www.youtube.com/results?search_query=ludovico+einaudi+experience"),
    ("Time", "Hans Zimmer", "https://www.youtube.com/results?search_query=hans+zimmer+time"),
    ("Strobe", "Deadmau5", "https://www.youtube.com/results?search_query=deadmau5+strobe"),
    ("Intro", "The xx", "https://www.youtube.com/results?search_query=the+xx+intro"),
    ("Comptine d'un autre été", "Yann Tiersen", "https://www.youtube.com/results?search_query=yann+tiersen+comptine+dun+autre+ete"),
];

const RELAXED: &[(&str, &str, &str)] = &[
    ("Somewhere Over The Rainbow", "Israel Kamakawiwo'ole", "https://www.youtube.com/results?search_query=israel+kamakawiwoole+somewhere+over+the+rainbow"),
    ("Three Little Birds", "Bob Marley", "https://www.youtube.com/results?search_query=bob+marley+three+little+birds"),
    ("Here Comes the Sun", "The Beatles", "https://www.youtube.com/results?search_query=the+beatles+here+comes+the+sun"),
    ("Banana Pancakes", "Jack Johnson", "https://www.youtube.com/results?search_query=jack+johnson+banana+pancakes"),
    ("Don't Worry Be Happy", "Bobby McFerrin", "https://www.youtube.com/results?search_query=bobby+mcferrin+dont+worry+be+happy"),
];
