//! English curriculum.

use crate::domain::course::{Course, Lesson, UiText, VizKind};

pub(super) fn ui_text() -> UiText {
    UiText {
        curriculum: "Core Curriculum",
        extras: "Extras & Polish",
        resources: "Resources",
        full_code: "Full Source Code",
        assets: "Game Assets",
        prev: "Previous",
        next: "Next Lesson",
        goal: "Goal",
        concept: "Concept",
        tip: "Tip:",
        tip_text: "\"Type a little, play a lot.\" Run the game after every few lines!",
        full_code_title: "Full Source Code",
        full_code_desc: "The complete Python script for the final game. Use this as a reference if you get stuck.",
        assets_title: "Game Assets",
        assets_desc: "Download the images and sounds you need for the game. Place them in your project folder.",
        sprites: "Sprites (Images)",
        audio: "Audio (Sounds)",
        download: "Download",
        copied: "Copied!",
        lesson_label: "Lesson",
    }
}

pub(super) fn course() -> Course {
    Course::new(
        vec![
            Lesson::new(
                "l1",
                1,
                "The Bird & Physics",
                "Make a bird that falls and jumps.",
                "Gravity is just \"speed going down\". Jumping is just \"speed going up\".",
            )
            .step_code(
                "Window Setup",
                "Start with the basics. Every game needs a window to draw on.",
                "import pgzrun\n\nTITLE = \"Flappy Bird\"\nWIDTH = 288\nHEIGHT = 512\n\npgzrun.go()",
            )
            .step_code(
                "The Actor",
                "We need a character. In Pygame Zero, we call this an Actor.",
                "bird = Actor('yellowbird-midflap')\nbird.pos = (50, HEIGHT/2)\n\ndef draw():\n    screen.clear()\n    bird.draw()",
            )
            .step_viz(
                "Gravity Logic",
                "Gravity pulls things down. We simulate this by constantly adding to the vertical speed (vy).",
                VizKind::Gravity,
                Some("gravity = 0.25\nbird.vy = 0\n\ndef update():\n    bird.vy += gravity\n    bird.y += bird.vy"),
            )
            .step_code(
                "Flapping",
                "When we press space, we reverse the velocity instantly to go up.",
                "def on_key_down(key):\n    if key == keys.SPACE:\n        bird.vy = -5.5",
            ),
            Lesson::new(
                "l2",
                2,
                "The World Moves",
                "Create the illusion of flying forward.",
                "The bird actually stays in the same X position. The world moves left!",
            )
            .step_code(
                "Background & Ground",
                "Add the background and ground actors. Order matters in draw()! Background first, ground last.",
                "bg = Actor('background-day')\nground = Actor('base')\nground.bottom = HEIGHT",
            )
            .step_viz(
                "Infinite Scroll",
                "When the ground goes off-screen, reset it to the right. We need two ground pieces for this to look smooth.",
                VizKind::Scrolling,
                Some("def update_ground():\n    ground1.x -= 2\n    if ground1.right < 0:\n        ground1.left = ground2.right"),
            ),
            Lesson::new(
                "l3",
                3,
                "The Pipes (Arrays)",
                "Obstacles that appear and move.",
                "We need many pipes, so we use a List [].",
            )
            .step_code(
                "Pipe List",
                "Create an empty list to track all the active pipes.",
                "pipes = []",
            )
            .step_viz(
                "Spawning Pairs",
                "We need a top pipe and a bottom pipe with a gap in between.",
                VizKind::Pipes,
                Some("def create_pipe_pair():\n    gap_y = random.randint(150, 400)\n    top = Actor('pipe-green', anchor=('center','bottom'))\n    top.pos = (WIDTH, gap_y - 100)\n    pipes.append(top)"),
            )
            .step_code(
                "Cleanup",
                "Important! Remove pipes when they leave the screen to keep the game fast.",
                "if pipes[0].right < 0:\n    pipes.pop(0)",
            ),
            Lesson::new(
                "l4",
                4,
                "Collision & Loops",
                "Detect when the game ends.",
                "Checking if rectangles overlap (Collision).",
            )
            .step_viz(
                "Collision Detection",
                "Check if the bird hits the pipes or the ground.",
                VizKind::Collision,
                Some("if bird.colliderect(pipe):\n    dead = True\n    sounds.hit.play()"),
            )
            .step_code(
                "Stop Everything",
                "When dead is True, stop the pipes from moving.",
                "if dead:\n    return # Stop updating",
            ),
        ],
        vec![
            Lesson::new(
                "e1",
                5,
                "Bringing it to Life",
                "Add wing flapping animation and rotation.",
                "Animation is just swapping images quickly. Rotation is based on speed.",
            )
            .step_code(
                "Image List",
                "Instead of one image, we load a list of images for the flapping frames.",
                "bird_images = [\n    'yellowbird-downflap',\n    'yellowbird-midflap',\n    'yellowbird-upflap'\n]\nbird = Actor(bird_images[0])",
            )
            .step_viz(
                "Frame Logic",
                "We use a counter to cycle through the images. 0 -> 1 -> 2 -> 0.",
                VizKind::Animation,
                Some("bird.frame = 0\n\ndef animate_bird():\n    bird.frame += 0.2\n    if bird.frame >= 3:\n        bird.frame = 0\n    bird.image = bird_images[int(bird.frame)]"),
            )
            .step_code(
                "Rotation",
                "The bird should tilt up when jumping and nose-dive when falling.",
                "bird.angle = min(20, max(-90, -bird.vy * 3))",
            ),
            Lesson::new(
                "e2",
                6,
                "Game States & UI",
                "Manage the Menu, Playing, and Game Over states.",
                "Use Boolean flags to control what happens in the game loop.",
            )
            .step_viz(
                "State Flags",
                "We use two variables to track the state of the game.",
                VizKind::States,
                Some("game_active = False\ndead = False"),
            )
            .step_code(
                "Controlling Draw",
                "If the game isn't active, show the \"Get Ready\" message instead of the score.",
                "if not game_active:\n    screen.draw.text(\"PRESS SPACE\", center=(WIDTH/2, HEIGHT/2))",
            )
            .step_code(
                "Smart Input",
                "The Space bar does different things depending on the state.",
                "if not game_active and not dead:\n    game_active = True  # Start\nelif game_active:\n    bird.vy = -5.5      # Flap\nelif dead:\n    reset_game()        # Restart",
            )
            .step_code(
                "Scoring",
                "Add to the score when the bird passes a pipe.",
                "score += 1\nscreen.draw.text(str(score))",
            ),
            Lesson::new(
                "e3",
                7,
                "Sound Effects",
                "Make the game feel alive with audio.",
                "Pygame Zero magic: Auto-loading sounds from the sounds/ folder.",
            )
            .step_code(
                "The Sounds Folder",
                "Pygame Zero looks for a folder named \"sounds\" next to your script. Put your .wav or .ogg files there (e.g., wing.wav, point.wav, hit.wav).",
                "# Folder Structure\n# my_game.py\n# images/\n# sounds/\n#   wing.wav\n#   point.wav\n#   hit.wav",
            )
            .step_code(
                "Playing Sounds",
                "You don't need to import anything! Just use sounds.filename.play().",
                "def on_key_down(key):\n    if key == keys.SPACE:\n        bird.vy = -5.5\n        sounds.wing.play()",
            )
            .step_code(
                "Scoring & Collision",
                "Add sound effects when the player scores a point or hits a pipe.",
                "# In update_pipes:\nscore += 1\nsounds.point.play()\n\n# In check_collisions:\nif bird.colliderect(pipe):\n    sounds.hit.play()",
            ),
        ],
    )
}
