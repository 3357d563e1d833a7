/*!
# `LIST`

## Purpose
Show the program currently in memory.

## Remarks
Lines are shown in ascending order no matter the order they were typed.
Direct mode only.

## Example
```text
30 END
10 REM START
LIST
10 REM START
30 END
```

*/
