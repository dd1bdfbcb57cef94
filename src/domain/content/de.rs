//! German curriculum. Mirrors the English lesson identifiers one to one.

use crate::domain::course::{Course, Lesson, UiText, VizKind};

pub(super) fn ui_text() -> UiText {
    UiText {
        curriculum: "Kernlehrplan",
        extras: "Extras & Feinschliff",
        resources: "Ressourcen",
        full_code: "Vollständiger Quellcode",
        assets: "Spiel-Assets",
        prev: "Zurück",
        next: "Nächste Lektion",
        goal: "Ziel",
        concept: "Konzept",
        tip: "Tipp:",
        tip_text: "\"Wenig tippen, viel spielen.\" Starte das Spiel nach ein paar Zeilen Code!",
        full_code_title: "Vollständiger Quellcode",
        full_code_desc: "Das komplette Python-Skript für das fertige Spiel. Nutze dies als Referenz, falls du nicht weiterkommst.",
        assets_title: "Spiel-Assets",
        assets_desc: "Lade die Bilder und Sounds herunter, die du für das Spiel benötigst. Platziere sie in deinem Projektordner.",
        sprites: "Sprites (Bilder)",
        audio: "Audio (Töne)",
        download: "Herunterladen",
        copied: "Kopiert!",
        lesson_label: "Lektion",
    }
}

pub(super) fn course() -> Course {
    Course::new(
        vec![
            Lesson::new(
                "l1",
                1,
                "Der Vogel & Physik",
                "Erstelle einen Vogel, der fällt und springt.",
                "Schwerkraft ist nur \"Geschwindigkeit nach unten\". Springen ist \"Geschwindigkeit nach oben\".",
            )
            .step_code(
                "Fenstereinrichtung",
                "Starte mit den Grundlagen. Jedes Spiel braucht ein Fenster zum Zeichnen.",
                "import pgzrun\n\nTITLE = \"Flappy Bird\"\nWIDTH = 288\nHEIGHT = 512\n\npgzrun.go()",
            )
            .step_code(
                "Der Akteur",
                "Wir brauchen eine Figur. In Pygame Zero nennen wir das einen Actor.",
                "bird = Actor('yellowbird-midflap')\nbird.pos = (50, HEIGHT/2)\n\ndef draw():\n    screen.clear()\n    bird.draw()",
            )
            .step_viz(
                "Schwerkraft-Logik",
                "Schwerkraft zieht Dinge nach unten. Wir simulieren das, indem wir ständig zur vertikalen Geschwindigkeit (vy) addieren.",
                VizKind::Gravity,
                Some("gravity = 0.25\nbird.vy = 0\n\ndef update():\n    bird.vy += gravity\n    bird.y += bird.vy"),
            )
            .step_code(
                "Flattern",
                "Wenn wir Leertaste drücken, kehren wir die Geschwindigkeit sofort um.",
                "def on_key_down(key):\n    if key == keys.SPACE:\n        bird.vy = -5.5",
            ),
            Lesson::new(
                "l2",
                2,
                "Die Welt bewegt sich",
                "Erzeuge die Illusion des Vorwärtsfliegens.",
                "Der Vogel bleibt eigentlich auf der gleichen X-Position. Die Welt bewegt sich nach links!",
            )
            .step_code(
                "Hintergrund & Boden",
                "Füge Hintergrund und Boden hinzu. Die Reihenfolge in draw() ist wichtig! Hintergrund zuerst, Boden zuletzt.",
                "bg = Actor('background-day')\nground = Actor('base')\nground.bottom = HEIGHT",
            )
            .step_viz(
                "Unendliches Scrollen",
                "Wenn der Boden den Bildschirm verlässt, setze ihn nach rechts zurück. Wir brauchen zwei Bodenteile, damit es flüssig aussieht.",
                VizKind::Scrolling,
                Some("def update_ground():\n    ground1.x -= 2\n    if ground1.right < 0:\n        ground1.left = ground2.right"),
            ),
            Lesson::new(
                "l3",
                3,
                "Die Röhren (Arrays)",
                "Hindernisse, die erscheinen und sich bewegen.",
                "Wir brauchen viele Röhren, also nutzen wir eine Liste [].",
            )
            .step_code(
                "Röhren-Liste",
                "Erstelle eine leere Liste, um alle aktiven Röhren zu verfolgen.",
                "pipes = []",
            )
            .step_viz(
                "Paare erzeugen",
                "Wir brauchen eine obere und eine untere Röhre mit einer Lücke dazwischen.",
                VizKind::Pipes,
                Some("def create_pipe_pair():\n    gap_y = random.randint(150, 400)\n    top = Actor('pipe-green', anchor=('center','bottom'))\n    top.pos = (WIDTH, gap_y - 100)\n    pipes.append(top)"),
            )
            .step_code(
                "Aufräumen",
                "Wichtig! Entferne Röhren, wenn sie den Bildschirm verlassen, um das Spiel schnell zu halten.",
                "if pipes[0].right < 0:\n    pipes.pop(0)",
            ),
            Lesson::new(
                "l4",
                4,
                "Kollision & Schleifen",
                "Erkenne, wann das Spiel vorbei ist.",
                "Prüfen, ob sich Rechtecke überschneiden (Kollision).",
            )
            .step_viz(
                "Kollisionserkennung",
                "Prüfe, ob der Vogel die Röhren oder den Boden trifft.",
                VizKind::Collision,
                Some("if bird.colliderect(pipe):\n    dead = True\n    sounds.hit.play()"),
            )
            .step_code(
                "Alles stoppen",
                "Wenn dead wahr ist, höre auf, die Röhren zu bewegen.",
                "if dead:\n    return # Update stoppen",
            ),
        ],
        vec![
            Lesson::new(
                "e1",
                5,
                "Leben einhauchen",
                "Flügelschlag-Animation und Rotation hinzufügen.",
                "Animation ist nur der schnelle Austausch von Bildern. Rotation basiert auf Geschwindigkeit.",
            )
            .step_code(
                "Bilder-Liste",
                "Statt einem Bild laden wir eine Liste von Bildern für die Flügelschlag-Frames.",
                "bird_images = [\n    'yellowbird-downflap',\n    'yellowbird-midflap',\n    'yellowbird-upflap'\n]\nbird = Actor(bird_images[0])",
            )
            .step_viz(
                "Frame-Logik",
                "Wir nutzen einen Zähler, um durch die Bilder zu wechseln. 0 -> 1 -> 2 -> 0.",
                VizKind::Animation,
                Some("bird.frame = 0\n\ndef animate_bird():\n    bird.frame += 0.2\n    if bird.frame >= 3:\n        bird.frame = 0\n    bird.image = bird_images[int(bird.frame)]"),
            )
            .step_code(
                "Rotation",
                "Der Vogel soll sich neigen: Nase hoch beim Springen, Nase runter beim Fallen.",
                "bird.angle = min(20, max(-90, -bird.vy * 3))",
            ),
            Lesson::new(
                "e2",
                6,
                "Spielzustände & UI",
                "Menü, Spielen und Game Over verwalten.",
                "Nutze Boolean-Flags, um den Spielfluss zu steuern.",
            )
            .step_viz(
                "Zustands-Flags",
                "Wir nutzen zwei Variablen, um den Zustand des Spiels zu verfolgen.",
                VizKind::States,
                Some("game_active = False\ndead = False"),
            )
            .step_code(
                "Zeichnen steuern",
                "Wenn das Spiel nicht aktiv ist, zeige \"Bereit machen\" statt des Punktestands.",
                "if not game_active:\n    screen.draw.text(\"DRÜCKE LEERTASTE\", center=(WIDTH/2, HEIGHT/2))",
            )
            .step_code(
                "Intelligente Eingabe",
                "Die Leertaste macht je nach Zustand etwas anderes.",
                "if not game_active and not dead:\n    game_active = True  # Start\nelif game_active:\n    bird.vy = -5.5      # Flattern\nelif dead:\n    reset_game()        # Neustart",
            )
            .step_code(
                "Punktestand",
                "Erhöhe den Score, wenn der Vogel eine Röhre passiert.",
                "score += 1\nscreen.draw.text(str(score))",
            ),
            Lesson::new(
                "e3",
                7,
                "Soundeffekte",
                "Erwecke das Spiel mit Audio zum Leben.",
                "Pygame Zero Magie: Automatisches Laden von Sounds aus dem sounds/ Ordner.",
            )
            .step_code(
                "Der Sounds-Ordner",
                "Pygame Zero sucht nach einem Ordner namens \"sounds\" neben deinem Skript. Lege dort deine .wav oder .ogg Dateien ab (z.B. wing.wav, point.wav, hit.wav).",
                "# Ordnerstruktur\n# mein_spiel.py\n# images/\n# sounds/\n#   wing.wav\n#   point.wav\n#   hit.wav",
            )
            .step_code(
                "Sounds abspielen",
                "Du musst nichts importieren! Nutze einfach sounds.dateiname.play().",
                "def on_key_down(key):\n    if key == keys.SPACE:\n        bird.vy = -5.5\n        sounds.wing.play()",
            )
            .step_code(
                "Punktestand & Kollision",
                "Füge Soundeffekte hinzu, wenn der Spieler punktet oder eine Röhre trifft.",
                "# In update_pipes:\nscore += 1\nsounds.point.play()\n\n# In check_collisions:\nif bird.colliderect(pipe):\n    sounds.hit.play()",
            ),
        ],
    )
}
